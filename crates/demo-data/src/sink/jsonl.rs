//! JSONL document export, one JSON document per line.
//!
//! Documents follow the backing store's import conventions: identifiers are
//! wrapped as `{"$uuid": "..."}` and timestamps as `{"$date": "..."}` with
//! RFC 3339 values.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use comedor::Dataset;
use comedor::models::{MenuItem, Orden, Pago, Promocion, Resena, Restaurante, Usuario};

use super::{CollectionReport, Sink, SinkError, SinkReport};

/// Writes each collection as a `<name>.jsonl` file under one directory.
pub struct JsonlSink {
    dir: PathBuf,
}

impl JsonlSink {
    /// Creates a sink writing into `dir`. The directory is created on export.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn write_collection<T>(
        &self,
        name: &'static str,
        rows: &[T],
        to_doc: fn(&T) -> Result<Value, SinkError>,
    ) -> Result<CollectionReport, SinkError> {
        let path = self.dir.join(format!("{name}.jsonl"));
        let file = File::create(&path)?;
        let mut writer = BufWriter::with_capacity(8192, file);

        for row in rows {
            serde_json::to_writer(&mut writer, &to_doc(row)?)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        info!("Wrote {} {} documents to {}", rows.len(), name, path.display());
        CollectionReport::from_path(name, rows.len(), &path)
    }
}

impl Sink for JsonlSink {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    fn export(&mut self, dataset: &Dataset) -> Result<SinkReport, SinkError> {
        fs::create_dir_all(&self.dir)?;

        let collections = vec![
            self.write_collection("usuarios", &dataset.usuarios, usuario_doc)?,
            self.write_collection("restaurantes", &dataset.restaurantes, restaurante_doc)?,
            self.write_collection("menu", &dataset.menu, menu_doc)?,
            self.write_collection("promociones", &dataset.promociones, promocion_doc)?,
            self.write_collection("ordenes", &dataset.ordenes, orden_doc)?,
            self.write_collection("resenas", &dataset.resenas, resena_doc)?,
            self.write_collection("pagos", &dataset.pagos, pago_doc)?,
        ];

        Ok(SinkReport { collections })
    }
}

fn uuid_ref(id: impl Display) -> Value {
    json!({ "$uuid": id.to_string() })
}

fn date_value(ts: OffsetDateTime) -> Result<Value, SinkError> {
    Ok(json!({ "$date": ts.format(&Rfc3339)? }))
}

fn usuario_doc(usuario: &Usuario) -> Result<Value, SinkError> {
    Ok(json!({
        "_id": uuid_ref(usuario.id),
        "nombre": usuario.nombre,
        "email": usuario.email,
        "ubicacion": serde_json::to_value(usuario.ubicacion)?,
        "fechaRegistro": date_value(usuario.fecha_registro)?,
        "edad": usuario.edad,
        "genero": usuario.genero.as_str(),
    }))
}

fn restaurante_doc(restaurante: &Restaurante) -> Result<Value, SinkError> {
    Ok(json!({
        "_id": uuid_ref(restaurante.id),
        "nombre": restaurante.nombre,
        "direccion": restaurante.direccion,
        "ubicacion": serde_json::to_value(restaurante.ubicacion)?,
        "categorias": restaurante.categorias,
        "createdAt": date_value(restaurante.created_at)?,
    }))
}

fn menu_doc(item: &MenuItem) -> Result<Value, SinkError> {
    Ok(json!({
        "_id": uuid_ref(item.id),
        "restaurante_id": uuid_ref(item.restaurante_id),
        "nombre": item.nombre,
        "descripcion": item.descripcion,
        "precio": item.precio,
        "disponible": item.disponible,
        "tags": item.tags,
        "createdAt": date_value(item.created_at)?,
    }))
}

fn promocion_doc(promocion: &Promocion) -> Result<Value, SinkError> {
    let items: Vec<Value> = promocion.items_aplicables.iter().map(uuid_ref).collect();

    let mut doc = json!({
        "_id": uuid_ref(promocion.id),
        "restaurante_id": uuid_ref(promocion.restaurante_id),
        "nombre": promocion.nombre,
        "fechaInicio": date_value(promocion.fecha_inicio)?,
        "fechaFin": date_value(promocion.fecha_fin)?,
        "tipo": promocion.tipo.as_str(),
        "items_aplicables": items,
    });
    if let Some(descuento) = promocion.descuento {
        doc["descuento"] = json!(descuento);
    }
    Ok(doc)
}

fn orden_doc(orden: &Orden) -> Result<Value, SinkError> {
    let items: Vec<Value> = orden
        .items
        .iter()
        .map(|linea| {
            json!({
                "menu_id": uuid_ref(linea.menu_id),
                "nombre": linea.nombre,
                "cantidad": linea.cantidad,
                "precio_unitario": linea.precio_unitario,
            })
        })
        .collect();

    let mut doc = json!({
        "_id": uuid_ref(orden.id),
        "usuario_id": uuid_ref(orden.usuario_id),
        "restaurante_id": uuid_ref(orden.restaurante_id),
        "estado": orden.estado.as_str(),
        "fechaPedido": date_value(orden.fecha_pedido)?,
        "fechaInicioPreparacion": date_value(orden.fecha_inicio_preparacion)?,
        "items": items,
        "total": orden.total,
    });
    if let Some(entrega) = orden.fecha_entrega {
        doc["fechaEntrega"] = date_value(entrega)?;
    }
    if let Some(promocion) = orden.promocion_aplicada {
        doc["promocion_aplicada"] = uuid_ref(promocion);
    }
    Ok(doc)
}

fn resena_doc(resena: &Resena) -> Result<Value, SinkError> {
    Ok(json!({
        "_id": uuid_ref(resena.id),
        "orden_id": uuid_ref(resena.orden_id),
        "usuario_id": uuid_ref(resena.usuario_id),
        "restaurante_id": uuid_ref(resena.restaurante_id),
        "calificacion": resena.calificacion,
        "comentario": resena.comentario,
        "fecha": date_value(resena.fecha)?,
    }))
}

fn pago_doc(pago: &Pago) -> Result<Value, SinkError> {
    Ok(json!({
        "_id": uuid_ref(pago.id),
        "orden_id": uuid_ref(pago.orden_id),
        "usuario_id": uuid_ref(pago.usuario_id),
        "monto": pago.monto,
        "metodoPago": pago.metodo_pago.as_str(),
        "estado": pago.estado.as_str(),
        "fecha": date_value(pago.fecha)?,
    }))
}
