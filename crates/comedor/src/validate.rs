//! Pre-export validation.
//!
//! Generation bugs (dangling references, cross-restaurant items, aggregate
//! mismatches) must be rejected here instead of reaching a sink. Validation
//! walks every collection against id indexes built once per collection and
//! returns the first violation found.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::dataset::Dataset;
use crate::ids::{MenuId, OrdenId, PagoId, PromocionId, ResenaId, RestauranteId, UsuarioId};
use crate::models::{EstadoOrden, TipoPromocion};

/// Maximum comment length the backend schema accepts.
pub const MAX_COMENTARIO_LEN: usize = 500;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{collection}.{field} references missing id {id}")]
    DanglingReference {
        collection: &'static str,
        field: &'static str,
        id: String,
    },

    #[error("duplicate email {email}")]
    DuplicateEmail { email: String },

    #[error("restaurant {restaurante} lists menu item {item} owned by another restaurant")]
    MenuOwnership {
        restaurante: RestauranteId,
        item: MenuId,
    },

    #[error("promotion {promocion} covers menu item {item} of another restaurant")]
    PromotionItemOwnership {
        promocion: PromocionId,
        item: MenuId,
    },

    #[error("promotion {promocion} window ends before it starts")]
    PromotionWindow { promocion: PromocionId },

    #[error("promotion {promocion} discount is inconsistent with tipo {tipo}")]
    DiscountPresence {
        promocion: PromocionId,
        tipo: &'static str,
    },

    #[error("promotion {promocion} discount {descuento} outside 0.1..=0.5")]
    DiscountRange {
        promocion: PromocionId,
        descuento: f64,
    },

    #[error("order {orden} line references menu item {item} of another restaurant")]
    OrderLineOwnership { orden: OrdenId, item: MenuId },

    #[error("order {orden} applied promotion {promocion} belongs to another restaurant")]
    AppliedPromotionOwnership {
        orden: OrdenId,
        promocion: PromocionId,
    },

    #[error("order {orden} timestamps are not strictly increasing")]
    OrderTimestamps { orden: OrdenId },

    #[error("order {orden} delivery timestamp does not match estado {estado}")]
    DeliveryPresence { orden: OrdenId, estado: &'static str },

    #[error("review {resena} rating {calificacion} outside 1.0..=5.0")]
    RatingRange { resena: ResenaId, calificacion: f64 },

    #[error("review {resena} comment exceeds {MAX_COMENTARIO_LEN} characters")]
    CommentLength { resena: ResenaId },

    #[error("review {resena} user/restaurant do not match its order")]
    ReviewOrderMismatch { resena: ResenaId },

    #[error("payment {pago} amount {monto} does not equal order total {total}")]
    PaymentAmount { pago: PagoId, monto: f64, total: f64 },

    #[error("payment {pago} user does not match its order")]
    PaymentUserMismatch { pago: PagoId },

    #[error("order {orden} has {count} payments, expected exactly one")]
    PaymentCardinality { orden: OrdenId, count: usize },
}

/// Checks cross-collection consistency of a finished dataset.
pub fn validate(dataset: &Dataset) -> Result<(), ValidationError> {
    let usuarios: HashSet<UsuarioId> = dataset.usuarios.iter().map(|u| u.id).collect();
    let restaurantes: HashSet<RestauranteId> = dataset.restaurantes.iter().map(|r| r.id).collect();
    let menu: HashMap<MenuId, RestauranteId> = dataset
        .menu
        .iter()
        .map(|m| (m.id, m.restaurante_id))
        .collect();
    let promociones: HashMap<PromocionId, RestauranteId> = dataset
        .promociones
        .iter()
        .map(|p| (p.id, p.restaurante_id))
        .collect();
    let ordenes: HashMap<OrdenId, &crate::models::Orden> =
        dataset.ordenes.iter().map(|o| (o.id, o)).collect();

    let mut emails: HashSet<&str> = HashSet::with_capacity(dataset.usuarios.len());
    for usuario in &dataset.usuarios {
        if !emails.insert(usuario.email.as_str()) {
            return Err(ValidationError::DuplicateEmail {
                email: usuario.email.clone(),
            });
        }
    }

    for restaurante in &dataset.restaurantes {
        for item_id in &restaurante.menu {
            match menu.get(item_id) {
                None => {
                    return Err(ValidationError::DanglingReference {
                        collection: "restaurantes",
                        field: "menu",
                        id: item_id.to_string(),
                    });
                }
                Some(owner) if *owner != restaurante.id => {
                    return Err(ValidationError::MenuOwnership {
                        restaurante: restaurante.id,
                        item: *item_id,
                    });
                }
                Some(_) => {}
            }
        }
    }

    for item in &dataset.menu {
        if !restaurantes.contains(&item.restaurante_id) {
            return Err(ValidationError::DanglingReference {
                collection: "menu",
                field: "restaurante_id",
                id: item.restaurante_id.to_string(),
            });
        }
    }

    for promocion in &dataset.promociones {
        if !restaurantes.contains(&promocion.restaurante_id) {
            return Err(ValidationError::DanglingReference {
                collection: "promociones",
                field: "restaurante_id",
                id: promocion.restaurante_id.to_string(),
            });
        }
        if promocion.fecha_fin < promocion.fecha_inicio {
            return Err(ValidationError::PromotionWindow {
                promocion: promocion.id,
            });
        }
        let needs_discount = promocion.tipo == TipoPromocion::Descuento;
        if promocion.descuento.is_some() != needs_discount {
            return Err(ValidationError::DiscountPresence {
                promocion: promocion.id,
                tipo: promocion.tipo.as_str(),
            });
        }
        if let Some(descuento) = promocion.descuento
            && !(0.1..=0.5).contains(&descuento)
        {
            return Err(ValidationError::DiscountRange {
                promocion: promocion.id,
                descuento,
            });
        }
        for item_id in &promocion.items_aplicables {
            match menu.get(item_id) {
                None => {
                    return Err(ValidationError::DanglingReference {
                        collection: "promociones",
                        field: "items_aplicables",
                        id: item_id.to_string(),
                    });
                }
                Some(owner) if *owner != promocion.restaurante_id => {
                    return Err(ValidationError::PromotionItemOwnership {
                        promocion: promocion.id,
                        item: *item_id,
                    });
                }
                Some(_) => {}
            }
        }
    }

    for orden in &dataset.ordenes {
        if !usuarios.contains(&orden.usuario_id) {
            return Err(ValidationError::DanglingReference {
                collection: "ordenes",
                field: "usuario_id",
                id: orden.usuario_id.to_string(),
            });
        }
        if !restaurantes.contains(&orden.restaurante_id) {
            return Err(ValidationError::DanglingReference {
                collection: "ordenes",
                field: "restaurante_id",
                id: orden.restaurante_id.to_string(),
            });
        }
        for linea in &orden.items {
            match menu.get(&linea.menu_id) {
                None => {
                    return Err(ValidationError::DanglingReference {
                        collection: "ordenes",
                        field: "items.menu_id",
                        id: linea.menu_id.to_string(),
                    });
                }
                Some(owner) if *owner != orden.restaurante_id => {
                    return Err(ValidationError::OrderLineOwnership {
                        orden: orden.id,
                        item: linea.menu_id,
                    });
                }
                Some(_) => {}
            }
        }
        if let Some(promocion_id) = orden.promocion_aplicada {
            match promociones.get(&promocion_id) {
                None => {
                    return Err(ValidationError::DanglingReference {
                        collection: "ordenes",
                        field: "promocion_aplicada",
                        id: promocion_id.to_string(),
                    });
                }
                Some(owner) if *owner != orden.restaurante_id => {
                    return Err(ValidationError::AppliedPromotionOwnership {
                        orden: orden.id,
                        promocion: promocion_id,
                    });
                }
                Some(_) => {}
            }
        }
        if orden.fecha_inicio_preparacion <= orden.fecha_pedido {
            return Err(ValidationError::OrderTimestamps { orden: orden.id });
        }
        match (orden.estado, orden.fecha_entrega) {
            (EstadoOrden::Entregado, None) => {
                return Err(ValidationError::DeliveryPresence {
                    orden: orden.id,
                    estado: orden.estado.as_str(),
                });
            }
            (EstadoOrden::Entregado, Some(entrega)) => {
                if entrega <= orden.fecha_inicio_preparacion {
                    return Err(ValidationError::OrderTimestamps { orden: orden.id });
                }
            }
            (_, Some(_)) => {
                return Err(ValidationError::DeliveryPresence {
                    orden: orden.id,
                    estado: orden.estado.as_str(),
                });
            }
            (_, None) => {}
        }
    }

    for resena in &dataset.resenas {
        let Some(orden) = ordenes.get(&resena.orden_id) else {
            return Err(ValidationError::DanglingReference {
                collection: "resenas",
                field: "orden_id",
                id: resena.orden_id.to_string(),
            });
        };
        if resena.usuario_id != orden.usuario_id || resena.restaurante_id != orden.restaurante_id {
            return Err(ValidationError::ReviewOrderMismatch { resena: resena.id });
        }
        if !(1.0..=5.0).contains(&resena.calificacion) {
            return Err(ValidationError::RatingRange {
                resena: resena.id,
                calificacion: resena.calificacion,
            });
        }
        if resena.comentario.chars().count() > MAX_COMENTARIO_LEN {
            return Err(ValidationError::CommentLength { resena: resena.id });
        }
    }

    let mut pagos_por_orden: HashMap<OrdenId, usize> = HashMap::new();
    for pago in &dataset.pagos {
        let Some(orden) = ordenes.get(&pago.orden_id) else {
            return Err(ValidationError::DanglingReference {
                collection: "pagos",
                field: "orden_id",
                id: pago.orden_id.to_string(),
            });
        };
        if pago.usuario_id != orden.usuario_id {
            return Err(ValidationError::PaymentUserMismatch { pago: pago.id });
        }
        if pago.monto != orden.total {
            return Err(ValidationError::PaymentAmount {
                pago: pago.id,
                monto: pago.monto,
                total: orden.total,
            });
        }
        *pagos_por_orden.entry(pago.orden_id).or_insert(0) += 1;
    }
    for orden in &dataset.ordenes {
        let count = pagos_por_orden.get(&orden.id).copied().unwrap_or(0);
        if count != 1 {
            return Err(ValidationError::PaymentCardinality {
                orden: orden.id,
                count,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::models::{
        EstadoPago, Genero, LineaOrden, MenuItem, MetodoPago, Orden, Pago, Promocion, Resena,
        Restaurante, Usuario,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::datetime;

    /// One consistent record per collection.
    fn small_dataset() -> Dataset {
        let mut rng = StdRng::seed_from_u64(99);
        let usuario_id = UsuarioId::generate(&mut rng);
        let restaurante_id = RestauranteId::generate(&mut rng);
        let menu_id = MenuId::generate(&mut rng);
        let promocion_id = PromocionId::generate(&mut rng);
        let orden_id = OrdenId::generate(&mut rng);

        Dataset {
            usuarios: vec![Usuario {
                id: usuario_id,
                nombre: "Carlos Lopez".into(),
                email: "carlos.lopez4@gmail.com".into(),
                ubicacion: GeoPoint::new(14.61, -90.52),
                fecha_registro: datetime!(2022-09-10 08:00:00 UTC),
                edad: 40,
                genero: Genero::Masculino,
            }],
            restaurantes: vec![Restaurante {
                id: restaurante_id,
                nombre: "La Esquina".into(),
                direccion: "4a Avenida 12-34, Zona 1".into(),
                ubicacion: GeoPoint::new(14.63, -90.51),
                categorias: vec!["mexicana".into(), "rapida".into()],
                created_at: datetime!(2025-01-20 14:00:00 UTC),
                menu: vec![menu_id],
            }],
            menu: vec![MenuItem {
                id: menu_id,
                restaurante_id,
                nombre: "Tacos Dorados".into(),
                descripcion: "Con queso y crema.".into(),
                precio: 95.0,
                disponible: true,
                tags: vec!["picante".into(), "gluten-free".into()],
                created_at: datetime!(2025-02-01 10:00:00 UTC),
            }],
            promociones: vec![Promocion {
                id: promocion_id,
                restaurante_id,
                nombre: "Promo Fiesta".into(),
                fecha_inicio: datetime!(2025-06-10 00:00:00 UTC),
                fecha_fin: datetime!(2025-06-17 00:00:00 UTC),
                tipo: TipoPromocion::Descuento,
                items_aplicables: vec![menu_id],
                descuento: Some(0.15),
            }],
            ordenes: vec![Orden {
                id: orden_id,
                usuario_id,
                restaurante_id,
                estado: EstadoOrden::Entregado,
                fecha_pedido: datetime!(2025-06-12 19:00:00 UTC),
                fecha_inicio_preparacion: datetime!(2025-06-12 19:05:00 UTC),
                fecha_entrega: Some(datetime!(2025-06-12 19:40:00 UTC)),
                items: vec![LineaOrden {
                    menu_id,
                    nombre: "Tacos Dorados".into(),
                    cantidad: 2,
                    precio_unitario: 95.0,
                }],
                total: 161.5,
                promocion_aplicada: Some(promocion_id),
            }],
            resenas: vec![Resena {
                id: ResenaId::generate(&mut rng),
                orden_id,
                usuario_id,
                restaurante_id,
                calificacion: 4.5,
                comentario: "Muy buena atención.".into(),
                fecha: datetime!(2025-06-13 12:00:00 UTC),
            }],
            pagos: vec![Pago {
                id: PagoId::generate(&mut rng),
                orden_id,
                usuario_id,
                monto: 161.5,
                metodo_pago: MetodoPago::Efectivo,
                estado: EstadoPago::Completado,
                fecha: datetime!(2025-06-12 19:10:00 UTC),
            }],
        }
    }

    #[test]
    fn test_accepts_consistent_dataset() {
        let dataset = small_dataset();
        assert!(validate(&dataset).is_ok());
    }

    #[test]
    fn test_rejects_dangling_menu_reference() {
        let mut dataset = small_dataset();
        let mut rng = StdRng::seed_from_u64(123);
        dataset.menu[0].restaurante_id = RestauranteId::generate(&mut rng);
        // The restaurant back-reference now points at an item owned elsewhere.
        let err = validate(&dataset).unwrap_err();
        assert!(matches!(err, ValidationError::MenuOwnership { .. }));
    }

    #[test]
    fn test_rejects_cross_restaurant_promotion_item() {
        let mut dataset = small_dataset();
        let mut rng = StdRng::seed_from_u64(124);
        dataset.promociones[0].restaurante_id = dataset.restaurantes[0].id;
        let foreign_item = MenuItem {
            id: MenuId::generate(&mut rng),
            restaurante_id: RestauranteId::generate(&mut rng),
            ..dataset.menu[0].clone()
        };
        dataset.restaurantes.push(Restaurante {
            id: foreign_item.restaurante_id,
            menu: vec![foreign_item.id],
            ..dataset.restaurantes[0].clone()
        });
        dataset.menu.push(foreign_item.clone());
        dataset.promociones[0].items_aplicables = vec![foreign_item.id];

        let err = validate(&dataset).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::PromotionItemOwnership { .. }
        ));
    }

    #[test]
    fn test_rejects_payment_amount_mismatch() {
        let mut dataset = small_dataset();
        dataset.pagos[0].monto += 1.0;
        let err = validate(&dataset).unwrap_err();
        assert!(matches!(err, ValidationError::PaymentAmount { .. }));
    }

    #[test]
    fn test_rejects_delivered_order_without_delivery_time() {
        let mut dataset = small_dataset();
        dataset.ordenes[0].fecha_entrega = None;
        let err = validate(&dataset).unwrap_err();
        assert!(matches!(err, ValidationError::DeliveryPresence { .. }));
    }

    #[test]
    fn test_rejects_rating_out_of_range() {
        let mut dataset = small_dataset();
        dataset.resenas[0].calificacion = 5.4;
        let err = validate(&dataset).unwrap_err();
        assert!(matches!(err, ValidationError::RatingRange { .. }));
    }

    #[test]
    fn test_rejects_missing_payment() {
        let mut dataset = small_dataset();
        dataset.pagos.clear();
        let err = validate(&dataset).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::PaymentCardinality { count: 0, .. }
        ));
    }

    #[test]
    fn test_rejects_discount_on_combo_promotion() {
        let mut dataset = small_dataset();
        dataset.promociones[0].tipo = TipoPromocion::Combo;
        // descuento stays Some(0.15)
        let err = validate(&dataset).unwrap_err();
        assert!(matches!(err, ValidationError::DiscountPresence { .. }));
    }
}
