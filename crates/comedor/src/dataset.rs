//! The assembled dataset and its lookup indexes.

use std::collections::HashMap;

use crate::ids::RestauranteId;
use crate::models::{MenuItem, Orden, Pago, Promocion, Resena, Restaurante, Usuario};

/// All seven collections of one generation run, in dependency order.
///
/// Collections are append-only while the pipeline runs and read-only once
/// passed to later stages or to a sink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub usuarios: Vec<Usuario>,
    pub restaurantes: Vec<Restaurante>,
    pub menu: Vec<MenuItem>,
    pub promociones: Vec<Promocion>,
    pub ordenes: Vec<Orden>,
    pub resenas: Vec<Resena>,
    pub pagos: Vec<Pago>,
}

impl Dataset {
    pub fn total_records(&self) -> usize {
        self.usuarios.len()
            + self.restaurantes.len()
            + self.menu.len()
            + self.promociones.len()
            + self.ordenes.len()
            + self.resenas.len()
            + self.pagos.len()
    }

    /// Builds the menu lookup index over this dataset's items.
    pub fn menu_index(&self) -> MenuIndex {
        MenuIndex::build(&self.menu)
    }
}

/// Maps each restaurant to the positions of its menu items in the source
/// slice. Built once; lookups never allocate.
#[derive(Debug, Clone, Default)]
pub struct MenuIndex {
    by_restaurante: HashMap<RestauranteId, Vec<usize>>,
}

impl MenuIndex {
    pub fn build(items: &[MenuItem]) -> Self {
        let mut by_restaurante: HashMap<RestauranteId, Vec<usize>> = HashMap::new();
        for (idx, item) in items.iter().enumerate() {
            by_restaurante
                .entry(item.restaurante_id)
                .or_default()
                .push(idx);
        }
        Self { by_restaurante }
    }

    /// Positions of the restaurant's items, empty when it has no menu.
    pub fn items_for(&self, restaurante: RestauranteId) -> &[usize] {
        self.by_restaurante
            .get(&restaurante)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::MenuId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::datetime;

    fn item(rng: &mut StdRng, restaurante: RestauranteId, nombre: &str) -> MenuItem {
        MenuItem {
            id: MenuId::generate(rng),
            restaurante_id: restaurante,
            nombre: nombre.into(),
            descripcion: "Plato de la casa.".into(),
            precio: 120.0,
            disponible: true,
            tags: vec!["vegetariano".into()],
            created_at: datetime!(2025-02-01 10:00:00 UTC),
        }
    }

    #[test]
    fn test_menu_index_groups_by_restaurant() {
        let mut rng = StdRng::seed_from_u64(9);
        let rest_a = RestauranteId::generate(&mut rng);
        let rest_b = RestauranteId::generate(&mut rng);
        let items = vec![
            item(&mut rng, rest_a, "Caldo"),
            item(&mut rng, rest_b, "Tamal"),
            item(&mut rng, rest_a, "Pepian"),
        ];

        let index = MenuIndex::build(&items);
        assert_eq!(index.items_for(rest_a), &[0, 2]);
        assert_eq!(index.items_for(rest_b), &[1]);

        let unknown = RestauranteId::generate(&mut rng);
        assert!(index.items_for(unknown).is_empty());
    }
}
