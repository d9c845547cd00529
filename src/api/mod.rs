mod axis_ticks;
mod coordinate_table;
mod document_exporter;
mod document_layout;
mod form_input;
mod parameter_list;
mod plot_frame_builder;
mod plot_options;
mod render_cycle;

pub use axis_ticks::AXIS_MAX_TICKS;
pub use coordinate_table::{
    CoordinateRow, CoordinateTable, TABLE_COLUMNS, TABLE_DECIMALS, build_table,
    round_to_decimals,
};
#[cfg(feature = "cairo-backend")]
pub use document_exporter::export_pdf;
pub use document_exporter::{
    DOCUMENT_FILE_NAME, DOCUMENT_MIME_TYPE, DocumentContent, ExportedDocument, export_document,
    export_document_on_page,
};
pub use document_layout::{
    DOCUMENT_TITLE, DocumentLayout, ExportMetadata, IMAGE_ERROR_PREFIX, PageSpec, fit_scale,
};
pub use form_input::{FormInput, MAX_POINT_SIZE, MIN_POINT_SIZE};
pub use parameter_list::ParameterList;
pub use plot_frame_builder::{axis_label, build_plot_frame, points_legend_label};
pub use plot_options::{DEFAULT_DPI, DEFAULT_FIGURE_SIZE_IN, PlotOptions};
pub use render_cycle::RenderCycle;
