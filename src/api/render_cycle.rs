use tracing::debug;

use crate::core::{
    CircleSpec, DataPoint, OUTLINE_RESOLUTION, PointSample, outline_points, sample_points,
};
use crate::error::PlotResult;
use crate::render::{PageCanvas, PlotImage, Rasterizer, RenderFrame, Renderer};

use super::{
    CoordinateTable, ExportMetadata, ExportedDocument, FormInput, ParameterList, PlotOptions,
    build_plot_frame, build_table, export_document,
};

/// Everything computed for one user action: geometry, plot scene and table.
///
/// Cycles share no state; each one is built from a fresh `FormInput`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCycle {
    spec: CircleSpec,
    options: PlotOptions,
    points: Vec<PointSample>,
    outline: Vec<DataPoint>,
    frame: RenderFrame,
    table: CoordinateTable,
}

impl RenderCycle {
    pub fn run(input: &FormInput) -> PlotResult<Self> {
        let spec = input.validate()?;
        Self::from_parts(spec, input.plot_options())
    }

    pub fn from_parts(spec: CircleSpec, options: PlotOptions) -> PlotResult<Self> {
        let center = spec.center();
        let points = sample_points(center, spec.radius, spec.point_count);
        let outline = outline_points(center, spec.radius, OUTLINE_RESOLUTION);
        let frame = build_plot_frame(&spec, &points, &outline, options)?;
        let table = build_table(&points, &spec.unit);
        debug!(
            point_count = spec.point_count,
            radius = spec.radius,
            show_grid = options.show_grid,
            show_labels = options.show_labels,
            "render cycle complete"
        );

        Ok(Self {
            spec,
            options,
            points,
            outline,
            frame,
            table,
        })
    }

    #[must_use]
    pub fn spec(&self) -> &CircleSpec {
        &self.spec
    }

    #[must_use]
    pub fn options(&self) -> PlotOptions {
        self.options
    }

    #[must_use]
    pub fn points(&self) -> &[PointSample] {
        &self.points
    }

    #[must_use]
    pub fn outline(&self) -> &[DataPoint] {
        &self.outline
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn table(&self) -> &CoordinateTable {
        &self.table
    }

    #[must_use]
    pub fn parameters(&self) -> ParameterList {
        ParameterList::from_spec(&self.spec)
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) -> PlotResult<()> {
        renderer.render(&self.frame)
    }

    /// Produces the single image shared by the display and export paths.
    pub fn rasterize<R: Rasterizer>(&self, rasterizer: &mut R) -> PlotResult<PlotImage> {
        rasterizer.rasterize(&self.frame, self.options.dpi)
    }

    pub fn export<C: PageCanvas>(
        &self,
        canvas: C,
        image: &PlotImage,
        metadata: &ExportMetadata,
    ) -> PlotResult<ExportedDocument> {
        export_document(canvas, image, &self.parameters(), metadata)
    }
}
