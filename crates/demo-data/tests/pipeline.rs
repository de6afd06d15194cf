//! Integration tests for end-to-end dataset generation.
//!
//! These tests verify the cross-collection guarantees of a built dataset:
//! - Order totals match their discounted line items
//! - Payments settle exactly one order each, for the full total
//! - Delivered orders carry a consistent timestamp chain
//! - Every reference points at an entity that exists
//! - The same seed reproduces the same dataset

use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;
use time::Duration;

use comedor::models::EstadoOrden;
use comedor::rounding::round2;
use comedor::{Dataset, validate};
use demo_data::builders::DatasetBuilder;
use demo_data::generators::ActivePromotions;
use demo_data::window::SynthesisWindow;

/// Builds a mid-sized dataset with enough promotions that both discounted
/// and undiscounted orders occur.
fn build_dataset(seed: u64) -> Dataset {
    let mut rng = StdRng::seed_from_u64(seed);
    DatasetBuilder::new()
        .with_usuarios(50)
        .with_restaurantes(10)
        .with_promociones(100)
        .with_ordenes(300)
        .with_resenas(80)
        .build_data(&mut rng)
        .dataset
}

#[test]
fn order_totals_match_discounted_lines() {
    let dataset = build_dataset(42);
    let window = SynthesisWindow::default();
    let active = ActivePromotions::at(&dataset.promociones, window.anchor());

    let mut discounted = 0;
    let mut undiscounted = 0;
    for orden in &dataset.ordenes {
        let mut expected = 0.0;
        for linea in &orden.items {
            let descuento = active
                .discount_for(orden.restaurante_id, linea.menu_id)
                .and_then(|p| p.descuento)
                .unwrap_or(0.0);
            expected += linea.precio_unitario * f64::from(linea.cantidad) * (1.0 - descuento);
        }
        assert_eq!(orden.total, round2(expected));

        if orden.promocion_aplicada.is_some() {
            discounted += 1;
        } else {
            undiscounted += 1;
        }
    }

    assert!(discounted > 0, "expected some discounted orders");
    assert!(undiscounted > 0, "expected some undiscounted orders");
}

#[test]
fn applied_promotions_discount_a_line() {
    let dataset = build_dataset(42);
    let window = SynthesisWindow::default();
    let active = ActivePromotions::at(&dataset.promociones, window.anchor());

    for orden in &dataset.ordenes {
        let Some(promocion_id) = orden.promocion_aplicada else {
            continue;
        };

        // The recorded promotion must be the first one that covered a line.
        let first_covered = orden.items.iter().find_map(|linea| {
            active
                .discount_for(orden.restaurante_id, linea.menu_id)
                .map(|p| p.id)
        });
        assert_eq!(first_covered, Some(promocion_id));
    }
}

#[test]
fn payments_settle_each_order_exactly_once() {
    let dataset = build_dataset(42);
    assert_eq!(dataset.pagos.len(), dataset.ordenes.len());

    let by_orden: HashMap<_, _> = dataset.ordenes.iter().map(|o| (o.id, o)).collect();
    let mut seen = HashSet::new();
    for pago in &dataset.pagos {
        assert!(seen.insert(pago.orden_id), "order paid twice");

        let orden = by_orden[&pago.orden_id];
        assert_eq!(pago.monto, orden.total);
        assert_eq!(pago.usuario_id, orden.usuario_id);
        assert_eq!(pago.fecha, orden.fecha_pedido + Duration::minutes(10));
    }
}

#[test]
fn delivered_orders_have_ordered_timestamps() {
    let dataset = build_dataset(42);

    let mut delivered = 0;
    for orden in &dataset.ordenes {
        assert!(orden.fecha_inicio_preparacion > orden.fecha_pedido);
        match orden.estado {
            EstadoOrden::Entregado => {
                let entrega = orden.fecha_entrega.unwrap();
                assert!(entrega > orden.fecha_inicio_preparacion);
                delivered += 1;
            }
            _ => assert!(orden.fecha_entrega.is_none()),
        }
    }
    assert!(delivered > 0);
}

#[test]
fn references_resolve_and_validation_passes() {
    let dataset = build_dataset(42);
    validate(&dataset).unwrap();

    let restaurantes: HashSet<_> = dataset.restaurantes.iter().map(|r| r.id).collect();
    for item in &dataset.menu {
        assert!(restaurantes.contains(&item.restaurante_id));
    }

    let usuarios: HashSet<_> = dataset.usuarios.iter().map(|u| u.id).collect();
    let ordenes: HashSet<_> = dataset.ordenes.iter().map(|o| o.id).collect();
    for orden in &dataset.ordenes {
        assert!(usuarios.contains(&orden.usuario_id));
        assert!(restaurantes.contains(&orden.restaurante_id));
    }
    for resena in &dataset.resenas {
        assert!(ordenes.contains(&resena.orden_id));
    }
}

#[test]
fn same_seed_reproduces_dataset() {
    assert_eq!(build_dataset(1234), build_dataset(1234));
    assert_ne!(build_dataset(1234), build_dataset(4321));
}

#[test]
fn smoke_scenario_keeps_orders_on_menued_restaurants() {
    let mut rng = StdRng::seed_from_u64(42);
    let dataset = DatasetBuilder::smoke_test().build_data(&mut rng).dataset;

    assert_eq!(dataset.usuarios.len(), 10);
    assert_eq!(dataset.restaurantes.len(), 2);
    assert_eq!(dataset.menu.len(), 10);
    assert_eq!(dataset.ordenes.len(), 20);

    for restaurante in &dataset.restaurantes {
        assert_eq!(restaurante.menu.len(), 5);
    }

    let menu_by_id: HashMap<_, _> = dataset.menu.iter().map(|m| (m.id, m)).collect();
    for orden in &dataset.ordenes {
        assert!(!orden.items.is_empty());
        for linea in &orden.items {
            assert_eq!(
                menu_by_id[&linea.menu_id].restaurante_id,
                orden.restaurante_id
            );
        }
    }
}
