use std::collections::BTreeSet;

use num_traits::{Signed, ToPrimitive, Zero};

use crate::{
    Arithmetic, Coords, ListBuilder, ListFormat, Polygon, PolygonError, Report, Triangle, TriangleWinding, Triangulation, TriangulationError, Vertex,
    math::{integrate_polygon, point_on_open_segment, point_strictly_inside_triangle, signed_area},
    ring::{Ring, VertexIdx},
};

#[cfg(feature = "debugging")]
use std::fmt;
#[cfg(feature = "debugging")]
use crate::debug;

/// How a vertex relates to its two neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VertexClass {
    /// Turns the same way as the polygon winds
    Convex,
    /// Turns against the polygon's winding
    Concave,
    /// Collinear with its neighbors
    Degenerate,
}

/// The ear-clipping engine.
///
/// Owns the polygon as a vertex ring plus three disjoint vertex sets:
/// * `ear_tips`: convex vertices whose triangle contains no concave vertex,
/// * `concave`: reflex vertices, the only vertices that can block an ear,
/// * `degenerate`: vertices collinear with their neighbors, removed without a triangle.
///
/// Clipping a vertex only changes the neighborhood of its two neighbors, so only those
/// are classified again.
pub struct EarClipper<A: Arithmetic> {
    arithmetic: A,
    ring: Ring<A::Coordinate>,
    ear_tips: BTreeSet<VertexIdx<A::Coordinate>>,
    concave: BTreeSet<VertexIdx<A::Coordinate>>,
    degenerate: BTreeSet<VertexIdx<A::Coordinate>>,
    area_from_integral: A::Area,
    area_from_triangulation: A::Area,
    triangles: usize,
    degenerate_clips: usize,
    #[cfg(feature = "debugging")]
    svg_context: Option<debug::svg::SvgContext>,
    #[cfg(feature = "debugging")]
    current_step: usize,
    #[cfg(feature = "debugging")]
    clipped: Vec<[[f32; 2]; 3]>,
}

/// A concave vertex blocks an ear if it lies strictly inside the ear's triangle, or
/// anywhere between the two ends of the ear's new edge. Clipping through the latter
/// would pinch the remaining ring at that vertex and leave it spanning the outside.
fn blocks_ear<A: Arithmetic>(arithmetic: &A, v: Coords<A::Coordinate>, [p0, p1, p2]: [Coords<A::Coordinate>; 3]) -> bool {
    point_strictly_inside_triangle(arithmetic, v, p0, p1, p2) || point_on_open_segment(arithmetic, v, p0, p2)
}

impl<A: Arithmetic> EarClipper<A> {
    /// Converts `polygon` to the backend's representation and classifies every vertex.
    ///
    /// A final vertex equal to the first one is dropped. At least 3 vertices must remain.
    pub fn new<'a, P: Polygon<'a>>(arithmetic: A, polygon: P) -> Result<Self, PolygonError> {
        let mut points = Vec::with_capacity(polygon.vertex_count());
        for index in 0..polygon.vertex_count() {
            let v = polygon.get_vertex(index);
            let coords = match (v.x().to_f64(), v.y().to_f64()) {
                (Some(x), Some(y)) => arithmetic.coords(x, y),
                _ => None,
            };
            points.push((index, coords.ok_or(PolygonError::InvalidCoordinate(index))?));
        }

        if points.len() > 1 && points.first().map(|(_, c)| *c) == points.last().map(|(_, c)| *c) {
            points.pop();
        }
        if points.len() < 3 {
            return Err(PolygonError::NotEnoughVertices(points.len()));
        }

        let coords: Vec<_> = points.iter().map(|(_, c)| *c).collect();
        let area_from_integral = integrate_polygon(&arithmetic, &coords);

        let mut clipper = Self {
            arithmetic,
            ring: Ring::new(points.into_iter()),
            ear_tips: BTreeSet::new(),
            concave: BTreeSet::new(),
            degenerate: BTreeSet::new(),
            area_from_integral,
            area_from_triangulation: A::Area::zero(),
            triangles: 0,
            degenerate_clips: 0,
            #[cfg(feature = "debugging")]
            svg_context: None,
            #[cfg(feature = "debugging")]
            current_step: 0,
            #[cfg(feature = "debugging")]
            clipped: Vec::new(),
        };
        #[cfg(feature = "debugging")]
        {
            clipper.svg_context = clipper.new_svg_context();
        }
        clipper.find_concave_and_ear_tips();
        Ok(clipper)
    }

    /// Clips ears until fewer than 3 vertices (or no clippable vertex) remain, feeding
    /// every non-degenerate ear to the builder created from `format`.
    ///
    /// Fails with [TriangulationError::InternalError] if the triangles don't add up to
    /// the polygon's area. The builder's `fail` is called before any error is returned.
    pub fn clip<F: ListFormat>(mut self, format: F) -> Result<Triangulation<<F::Builder as ListBuilder>::Output>, TriangulationError<<F::Builder as ListBuilder>::Error>> {
        let mut builder = format.initialize()?;
        #[cfg(feature = "debugging")]
        self.output_svg(None, debug::svg::SvgOutputLevel::MajorSteps);

        // Separate out the clipping loop, so builder error handling is in one place
        match self.clip_all(&mut builder) {
            Ok(()) => {
                let report = self.report();
                log::info!("{}", report);
                #[cfg(feature = "debugging")]
                self.output_svg(None, debug::svg::SvgOutputLevel::ResultOnly);
                let output = builder.build()?;
                Ok(Triangulation { output, report })
            }
            Err(err) => {
                builder.fail(&err);
                Err(err)
            }
        }
    }

    /// The diagnostics for the current state
    pub fn report(&self) -> Report {
        Report {
            mode: self.arithmetic.mode(),
            winding: TriangleWinding::of(self.area_from_integral),
            area_from_integral: self.arithmetic.area_to_real(self.area_from_integral),
            area_from_triangulation: self.arithmetic.area_to_real(self.area_from_triangulation),
            triangles: self.triangles,
            degenerate: self.degenerate_clips,
        }
    }

    /// Number of vertices not yet clipped
    pub fn vertex_count(&self) -> usize {
        self.ring.len()
    }

    pub fn ear_tip_count(&self) -> usize {
        self.ear_tips.len()
    }

    pub fn concave_count(&self) -> usize {
        self.concave.len()
    }

    pub fn degenerate_count(&self) -> usize {
        self.degenerate.len()
    }

    /// The polygon's signed area, positive for counter-clockwise polygons
    pub fn area_from_integral(&self) -> f64 {
        self.arithmetic.area_to_real(self.area_from_integral)
    }

    fn find_concave_and_ear_tips(&mut self) {
        let mut convex = Vec::new();
        for vi in self.ring.iter_index() {
            match self.classify(vi) {
                VertexClass::Convex => convex.push(vi), // not an ear yet
                VertexClass::Concave => { self.concave.insert(vi); }
                VertexClass::Degenerate => { self.degenerate.insert(vi); }
            }
        }
        for vi in convex {
            if self.is_ear(vi) {
                self.ear_tips.insert(vi);
            }
        }
        log::debug!(
            "classified {} vertices: {} ear tips, {} concave, {} degenerate",
            self.ring.len(), self.ear_tips.len(), self.concave.len(), self.degenerate.len(),
        );
    }

    fn class_of(&self, area: A::Area) -> VertexClass {
        if area.is_zero() {
            VertexClass::Degenerate
        } else if area.is_positive() == self.area_from_integral.is_positive() {
            VertexClass::Convex
        } else {
            VertexClass::Concave
        }
    }

    pub(crate) fn classify(&self, vi: VertexIdx<A::Coordinate>) -> VertexClass {
        let [p0, p1, p2] = self.ring.triangle(vi);
        self.class_of(signed_area(&self.arithmetic, p0, p1, p2))
    }

    pub(crate) fn is_convex(&self, vi: VertexIdx<A::Coordinate>) -> bool {
        self.classify(vi) == VertexClass::Convex
    }

    /// Assumes `vi` is convex. Only concave vertices are tested: in a simple polygon
    /// no vertex lies inside a convex vertex's triangle unless a concave one does.
    pub(crate) fn is_ear(&self, vi: VertexIdx<A::Coordinate>) -> bool {
        let triangle = self.ring.triangle(vi);
        !self.concave.iter().any(|ci| blocks_ear(&self.arithmetic, self.ring.coords(*ci), triangle))
    }

    /// Degenerate vertices go first, then ear tips, lowest index first
    fn pop_candidate(&mut self) -> Option<VertexIdx<A::Coordinate>> {
        self.degenerate.pop_first().or_else(|| self.ear_tips.pop_first())
    }

    fn clip_all<B: ListBuilder>(&mut self, builder: &mut B) -> Result<(), TriangulationError<B::Error>> {
        while self.ring.len() >= 3 {
            let p1 = match self.pop_candidate() {
                Some(p1) => p1,
                None => break,
            };
            self.clip_vertex(p1, builder)?;
        }
        self.check_area()
    }

    fn clip_vertex<B: ListBuilder>(&mut self, p1: VertexIdx<A::Coordinate>, builder: &mut B) -> Result<(), TriangulationError<B::Error>> {
        debug_assert!(self.ring.vertex(p1).is_live());
        let p0 = self.ring.prev(p1);
        let p2 = self.ring.next(p1);
        let [c0, c1, c2] = self.ring.triangle(p1);
        let area = signed_area(&self.arithmetic, c0, c1, c2);

        if area.is_zero() {
            log::trace!("removing degenerate vertex {}", p1);
            self.degenerate_clips += 1;
        } else {
            if !self.is_convex(p1) {
                return Err(TriangulationError::internal(format!("Ear tip {} turns against the polygon's winding", p1)));
            }
            let triangle = Triangle {
                indices: [p0, p1, p2].map(|vi| self.ring.vertex(vi).source()),
                vertices: [c0, c1, c2].map(|c| [self.arithmetic.to_real(c.x()), self.arithmetic.to_real(c.y())]),
            };
            log::trace!("clipping ear {}: {}", p1, triangle);
            builder.add_triangle(&triangle)?;
            self.area_from_triangulation += area;
            self.triangles += 1;
            #[cfg(feature = "debugging")]
            self.clipped.push(triangle.vertices.map(|[x, y]| [x as f32, y as f32]));
        }

        self.ring.remove(p1);
        self.ear_tips.remove(&p1);
        self.degenerate.remove(&p1);
        if self.ring.len() >= 3 {
            self.reclassify(p0);
            self.reclassify(p2);
        }

        #[cfg(feature = "debugging")]
        self.output_svg(Some(p1), debug::svg::SvgOutputLevel::AllSteps);
        Ok(())
    }

    /// Updates the sets for a vertex that just lost a neighbor
    fn reclassify(&mut self, vi: VertexIdx<A::Coordinate>) {
        match self.classify(vi) {
            VertexClass::Degenerate => {
                self.concave.remove(&vi);
                self.ear_tips.remove(&vi);
                self.degenerate.insert(vi);
            }
            VertexClass::Convex => {
                self.concave.remove(&vi);
                self.degenerate.remove(&vi);
                if self.is_ear(vi) {
                    self.ear_tips.insert(vi);
                } else {
                    self.ear_tips.remove(&vi);
                }
            }
            VertexClass::Concave => {
                self.ear_tips.remove(&vi);
                self.degenerate.remove(&vi);
                // Only a vertex seen as degenerate or convex so far lands here, which a
                // simple polygon never produces from a convex vertex
                if self.concave.insert(vi) {
                    log::debug!("{} became concave", vi);
                    self.revalidate_ear_tips(vi);
                }
            }
        }
    }

    /// Drops ear tips whose triangle contains the newly concave vertex `ci`
    fn revalidate_ear_tips(&mut self, ci: VertexIdx<A::Coordinate>) {
        let c = self.ring.coords(ci);
        let ring = &self.ring;
        let arithmetic = &self.arithmetic;
        self.ear_tips.retain(|vi| !blocks_ear(arithmetic, c, ring.triangle(*vi)));
    }

    fn check_area<E: std::error::Error>(&self) -> Result<(), TriangulationError<E>> {
        let difference = (self.area_from_triangulation - self.area_from_integral).abs();
        if difference > self.arithmetic.tolerance() {
            Err(TriangulationError::internal(format!(
                "area_from_triangulation ({:?}) does not match area_from_integral ({:?}); {} vertices were left unclipped",
                self.area_from_triangulation, self.area_from_integral, self.ring.len(),
            )))
        } else {
            Ok(())
        }
    }

    #[cfg(test)]
    pub(crate) fn ear_tip_sources(&self) -> Vec<usize> {
        self.ear_tips.iter().map(|vi| self.ring.vertex(*vi).source()).collect()
    }

    #[cfg(test)]
    pub(crate) fn concave_sources(&self) -> Vec<usize> {
        self.concave.iter().map(|vi| self.ring.vertex(*vi).source()).collect()
    }

    #[cfg(test)]
    pub(crate) fn degenerate_sources(&self) -> Vec<usize> {
        self.degenerate.iter().map(|vi| self.ring.vertex(*vi).source()).collect()
    }

    /// Source positions of the vertices classified convex, in ring order
    #[cfg(test)]
    pub(crate) fn convex_sources(&self) -> Vec<usize> {
        self.ring.iter_live().filter(|vi| self.classify(*vi) == VertexClass::Convex).map(|vi| self.ring.vertex(vi).source()).collect()
    }
}

#[cfg(feature = "debugging")]
impl<A: Arithmetic> EarClipper<A> {
    fn real_coords(&self, vi: VertexIdx<A::Coordinate>) -> [f32; 2] {
        let c = self.ring.coords(vi);
        [self.arithmetic.to_real(c.x()) as f32, self.arithmetic.to_real(c.y()) as f32]
    }

    fn new_svg_context(&self) -> Option<debug::svg::SvgContext> {
        let output_path = debug::env::svg::output_path()?;
        let output_level = debug::env::svg::output_level();
        if output_level == debug::svg::SvgOutputLevel::None {
            return None;
        }
        let points = self.ring.iter_index().map(|vi| self.real_coords(vi));
        Some(debug::svg::SvgContext::new(output_path, output_level, debug::env::svg::show_labels(), points))
    }

    fn output_svg(&mut self, highlight: Option<VertexIdx<A::Coordinate>>, level: debug::svg::SvgOutputLevel) {
        if let Some(svg_context) = &self.svg_context {
            if svg_context.output_level >= level {
                let _ = std::fs::create_dir_all(&svg_context.output_path);
                let mut svg = debug::svg::SvgOutput::new(svg_context);
                let _ = svg.append_element(self, &highlight);
                let _ = svg.save(format!("{:03}.svg", self.current_step));
            }
        }
        self.current_step += 1;
    }
}

#[cfg(feature = "debugging")]
impl<A: Arithmetic> debug::svg::SvgElement<Option<VertexIdx<A::Coordinate>>> for EarClipper<A> {
    fn write_svg(&self, svg_output: &mut debug::svg::SvgOutput<'_>, highlight: &Option<VertexIdx<A::Coordinate>>) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        let line_width = svg_output.context.percent(0.2);
        for triangle in &self.clipped {
            writeln!(svg_output, "{}",
                polygon(&triangle[..])
                    .fill(Fill::None)
                    .stroke(Stroke::Color(rgb(160, 160, 160), line_width))
            )?;
        }

        let live: Vec<_> = self.ring.iter_live().collect();
        if live.len() > 2 {
            let points: Vec<_> = live.iter().map(|vi| self.real_coords(*vi)).collect();
            writeln!(svg_output, "{}",
                polygon(&points[..])
                    .fill(Fill::None)
                    .stroke(Stroke::Color(black(), line_width))
            )?;
        }

        let r = svg_output.context.percent(0.6);
        for vi in live.iter().copied() {
            let [x, y] = self.real_coords(vi);
            let color = if Some(vi) == *highlight {
                rgb(255, 126, 0)
            } else if self.ear_tips.contains(&vi) {
                green()
            } else if self.concave.contains(&vi) {
                red()
            } else if self.degenerate.contains(&vi) {
                blue()
            } else {
                black()
            };
            writeln!(svg_output, "{}", debug::svg::circle(x, y, r).fill(Fill::Color(color)))?;

            if svg_output.context.show_labels {
                let gap = svg_output.context.percent(1.0);
                writeln!(svg_output, "{}",
                    text(x - gap, y, vi.to_string())
                        .color(black())
                        .align(Align::Right)
                        .size(svg_output.context.percent(2.0))
                )?;
            }
        }
        if let Some(vi) = highlight {
            if !self.ring.vertex(*vi).is_live() {
                let [x, y] = self.real_coords(*vi);
                writeln!(svg_output, "{}", debug::svg::circle(x, y, r).fill(Fill::Color(rgb(255, 126, 0))))?;
            }
        }
        Ok(())
    }
}
