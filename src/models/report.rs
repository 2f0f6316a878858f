use serde::Serialize;
use serde_json::Value;

/// The four reporting views defined in the database schema. The view name is
/// only ever taken from this enum, never from request input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportView {
    PedidosDetalles,
    ClientesConPedidos,
    VentasResumen,
    InventarioActual,
}

impl ReportView {
    pub const ALL: [ReportView; 4] = [
        ReportView::PedidosDetalles,
        ReportView::ClientesConPedidos,
        ReportView::VentasResumen,
        ReportView::InventarioActual,
    ];

    pub fn view_name(self) -> &'static str {
        match self {
            ReportView::PedidosDetalles => "vista_pedidos_detalles",
            ReportView::ClientesConPedidos => "vista_clientes_con_pedidos",
            ReportView::VentasResumen => "vista_ventas_resumen",
            ReportView::InventarioActual => "vista_inventario_actual",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportView::PedidosDetalles => "Detalles de Pedidos",
            ReportView::ClientesConPedidos => "Clientes con Pedidos",
            ReportView::VentasResumen => "Resumen de Ventas",
            ReportView::InventarioActual => "Inventario Actual",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            ReportView::PedidosDetalles => "/pedidos_detalles",
            ReportView::ClientesConPedidos => "/clientes_pedidos",
            ReportView::VentasResumen => "/ventas_resumen",
            ReportView::InventarioActual => "/inventario_actual",
        }
    }

    pub fn select_all(self) -> String {
        format!("SELECT * FROM {}", self.view_name())
    }
}

/// Result of one report query: column names in view order plus opaque rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}
