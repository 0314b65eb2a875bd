use js_sys::Array;
use serde::Deserialize;
use streamline::{streamline_collection, DrawSegments, LineCollection, StreamlineStyle};
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[derive(Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Strokes every segment as soon as a collection is added
pub struct CanvasSurface<'c>(pub &'c CanvasRenderingContext2d);

impl<'c> DrawSegments for CanvasSurface<'c> {
    fn add_collection(&mut self, collection: LineCollection) {
        let ctx = self.0;
        let width = ctx.line_width();
        ctx.set_line_cap("round");
        for (&[from, to], color, line_width) in collection.styled_segments() {
            ctx.begin_path();
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            ctx.set_global_alpha(color.opacity());
            ctx.set_stroke_style(&JsValue::from_str(&color.to_hex()));
            ctx.set_line_width(line_width);
            ctx.stroke();
        }
        ctx.set_global_alpha(1.0);
        ctx.set_line_width(width);
    }
}

#[wasm_bindgen]
pub struct Streamline(LineCollection);

#[wasm_bindgen]
impl Streamline {
    #[wasm_bindgen(constructor)]
    pub fn new(
        points: Array,
        color1: &str,
        color2: &str,
        color_power: f64,
        linewidth: f64,
    ) -> Result<Streamline, JsValue> {
        let mut x = Vec::with_capacity(points.length() as usize);
        let mut y = Vec::with_capacity(points.length() as usize);
        for i in 0..points.length() {
            let point: Point = points
                .get(i)
                .into_serde()
                .map_err(|err| JsValue::from_str(&err.to_string()))?;
            x.push(point.x);
            y.push(point.y);
        }

        let style = StreamlineStyle::from_specs(color1, color2, color_power, linewidth)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        streamline_collection(&x, &y, &style)
            .map(Streamline)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    #[wasm_bindgen]
    pub fn draw(&self, ctx: CanvasRenderingContext2d) {
        CanvasSurface(&ctx).add_collection(self.0.clone());
    }

    #[wasm_bindgen(js_name = segmentCount)]
    pub fn segment_count(&self) -> usize {
        self.0.len()
    }
}
