//! Dashboard building blocks: metric tiles, charts, tables, banners.

pub mod error_banner;
pub mod metric_card;
pub mod order_flow_chart;
pub mod page_header;
pub mod pagination_bar;
pub mod recent_orders_table;

pub use error_banner::*;
pub use metric_card::*;
pub use order_flow_chart::*;
pub use page_header::*;
pub use pagination_bar::*;
pub use recent_orders_table::*;
