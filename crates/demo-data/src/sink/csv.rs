//! Flat CSV export, one table per collection.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use comedor::Dataset;
use comedor::models::{MenuItem, Orden, Pago, Promocion, Resena, Restaurante, Usuario};

use super::{CollectionReport, Sink, SinkError, SinkReport};

/// Writes each collection as a flat CSV table under one directory.
///
/// Nested values are flattened: locations become `lat`/`lon` columns, string
/// lists are joined with `", "`, order lines are embedded as a JSON array,
/// and absent optionals become empty cells.
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    /// Creates a sink writing into `dir`. The directory is created on export.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn write_usuarios(&self, usuarios: &[Usuario]) -> Result<CollectionReport, SinkError> {
        let path = self.dir.join("usuarios.csv");
        let mut writer = table_writer(&path)?;
        writer.write_record([
            "_id",
            "nombre",
            "email",
            "lat",
            "lon",
            "fechaRegistro",
            "edad",
            "genero",
        ])?;

        for usuario in usuarios {
            writer.write_record([
                usuario.id.to_string(),
                usuario.nombre.clone(),
                usuario.email.clone(),
                usuario.ubicacion.lat.to_string(),
                usuario.ubicacion.lon.to_string(),
                rfc3339(usuario.fecha_registro)?,
                usuario.edad.to_string(),
                usuario.genero.as_str().to_string(),
            ])?;
        }
        writer.flush()?;

        info!("Wrote {} usuarios to {}", usuarios.len(), path.display());
        CollectionReport::from_path("usuarios", usuarios.len(), &path)
    }

    fn write_restaurantes(
        &self,
        restaurantes: &[Restaurante],
    ) -> Result<CollectionReport, SinkError> {
        let path = self.dir.join("restaurantes.csv");
        let mut writer = table_writer(&path)?;
        writer.write_record([
            "_id",
            "nombre",
            "direccion",
            "lat",
            "lon",
            "categorias",
            "createdAt",
        ])?;

        for restaurante in restaurantes {
            writer.write_record([
                restaurante.id.to_string(),
                restaurante.nombre.clone(),
                restaurante.direccion.clone(),
                restaurante.ubicacion.lat.to_string(),
                restaurante.ubicacion.lon.to_string(),
                restaurante.categorias.join(", "),
                rfc3339(restaurante.created_at)?,
            ])?;
        }
        writer.flush()?;

        info!(
            "Wrote {} restaurantes to {}",
            restaurantes.len(),
            path.display()
        );
        CollectionReport::from_path("restaurantes", restaurantes.len(), &path)
    }

    fn write_menu(&self, menu: &[MenuItem]) -> Result<CollectionReport, SinkError> {
        let path = self.dir.join("menu.csv");
        let mut writer = table_writer(&path)?;
        writer.write_record([
            "_id",
            "restaurante_id",
            "nombre",
            "descripcion",
            "precio",
            "disponible",
            "tags",
            "createdAt",
        ])?;

        for item in menu {
            writer.write_record([
                item.id.to_string(),
                item.restaurante_id.to_string(),
                item.nombre.clone(),
                item.descripcion.clone(),
                item.precio.to_string(),
                item.disponible.to_string(),
                item.tags.join(", "),
                rfc3339(item.created_at)?,
            ])?;
        }
        writer.flush()?;

        info!("Wrote {} menu items to {}", menu.len(), path.display());
        CollectionReport::from_path("menu", menu.len(), &path)
    }

    fn write_promociones(
        &self,
        promociones: &[Promocion],
    ) -> Result<CollectionReport, SinkError> {
        let path = self.dir.join("promociones.csv");
        let mut writer = table_writer(&path)?;
        writer.write_record([
            "_id",
            "restaurante_id",
            "nombre",
            "fechaInicio",
            "fechaFin",
            "tipo",
            "items_aplicables",
            "descuento",
        ])?;

        for promocion in promociones {
            let items = promocion
                .items_aplicables
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");

            writer.write_record([
                promocion.id.to_string(),
                promocion.restaurante_id.to_string(),
                promocion.nombre.clone(),
                rfc3339(promocion.fecha_inicio)?,
                rfc3339(promocion.fecha_fin)?,
                promocion.tipo.as_str().to_string(),
                items,
                promocion
                    .descuento
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
            ])?;
        }
        writer.flush()?;

        info!(
            "Wrote {} promociones to {}",
            promociones.len(),
            path.display()
        );
        CollectionReport::from_path("promociones", promociones.len(), &path)
    }

    fn write_ordenes(&self, ordenes: &[Orden]) -> Result<CollectionReport, SinkError> {
        let path = self.dir.join("ordenes.csv");
        let mut writer = table_writer(&path)?;
        writer.write_record([
            "_id",
            "usuario_id",
            "restaurante_id",
            "estado",
            "fechaPedido",
            "fechaInicioPreparacion",
            "fechaEntrega",
            "items",
            "total",
            "promocion_aplicada",
        ])?;

        for orden in ordenes {
            let fecha_entrega = match orden.fecha_entrega {
                Some(entrega) => rfc3339(entrega)?,
                None => String::new(),
            };

            writer.write_record([
                orden.id.to_string(),
                orden.usuario_id.to_string(),
                orden.restaurante_id.to_string(),
                orden.estado.as_str().to_string(),
                rfc3339(orden.fecha_pedido)?,
                rfc3339(orden.fecha_inicio_preparacion)?,
                fecha_entrega,
                serde_json::to_string(&orden.items)?,
                orden.total.to_string(),
                orden
                    .promocion_aplicada
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            ])?;
        }
        writer.flush()?;

        info!("Wrote {} ordenes to {}", ordenes.len(), path.display());
        CollectionReport::from_path("ordenes", ordenes.len(), &path)
    }

    fn write_resenas(&self, resenas: &[Resena]) -> Result<CollectionReport, SinkError> {
        let path = self.dir.join("resenas.csv");
        let mut writer = table_writer(&path)?;
        writer.write_record([
            "_id",
            "orden_id",
            "usuario_id",
            "restaurante_id",
            "calificacion",
            "comentario",
            "fecha",
        ])?;

        for resena in resenas {
            writer.write_record([
                resena.id.to_string(),
                resena.orden_id.to_string(),
                resena.usuario_id.to_string(),
                resena.restaurante_id.to_string(),
                resena.calificacion.to_string(),
                resena.comentario.clone(),
                rfc3339(resena.fecha)?,
            ])?;
        }
        writer.flush()?;

        info!("Wrote {} resenas to {}", resenas.len(), path.display());
        CollectionReport::from_path("resenas", resenas.len(), &path)
    }

    fn write_pagos(&self, pagos: &[Pago]) -> Result<CollectionReport, SinkError> {
        let path = self.dir.join("pagos.csv");
        let mut writer = table_writer(&path)?;
        writer.write_record([
            "_id",
            "orden_id",
            "usuario_id",
            "monto",
            "metodoPago",
            "estado",
            "fecha",
        ])?;

        for pago in pagos {
            writer.write_record([
                pago.id.to_string(),
                pago.orden_id.to_string(),
                pago.usuario_id.to_string(),
                pago.monto.to_string(),
                pago.metodo_pago.as_str().to_string(),
                pago.estado.as_str().to_string(),
                rfc3339(pago.fecha)?,
            ])?;
        }
        writer.flush()?;

        info!("Wrote {} pagos to {}", pagos.len(), path.display());
        CollectionReport::from_path("pagos", pagos.len(), &path)
    }
}

impl Sink for CsvSink {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn export(&mut self, dataset: &Dataset) -> Result<SinkReport, SinkError> {
        fs::create_dir_all(&self.dir)?;

        let collections = vec![
            self.write_usuarios(&dataset.usuarios)?,
            self.write_restaurantes(&dataset.restaurantes)?,
            self.write_menu(&dataset.menu)?,
            self.write_promociones(&dataset.promociones)?,
            self.write_ordenes(&dataset.ordenes)?,
            self.write_resenas(&dataset.resenas)?,
            self.write_pagos(&dataset.pagos)?,
        ];

        Ok(SinkReport { collections })
    }
}

fn table_writer(path: &Path) -> Result<csv::Writer<BufWriter<File>>, SinkError> {
    let file = File::create(path)?;
    Ok(csv::WriterBuilder::new().from_writer(BufWriter::new(file)))
}

fn rfc3339(ts: OffsetDateTime) -> Result<String, SinkError> {
    Ok(ts.format(&Rfc3339)?)
}
