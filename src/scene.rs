//! A triangle list and an edge list rendered together.

use log::info;

use crate::color::Color;
use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::math::curve::CurveKind;
use crate::point_store::PointStore;
use crate::render::{draw_edges, fill_triangles, PlotTarget, RenderStats};
use crate::shapes;

pub struct Scene {
    pub polygons: PointStore,
    pub edges: PointStore,
    pub edge_color: Color,
}

impl Scene {
    pub fn new(config: &RenderConfig, edge_color: Color) -> Self {
        Self {
            polygons: PointStore::with_policy(0, config.growth),
            edges: PointStore::with_policy(0, config.growth),
            edge_color,
        }
    }

    /// The showcase scene: a box, a sphere and a torus as filled surfaces,
    /// and a circle with a Hermite and a Bezier curve as wireframe, laid out
    /// for a `config.width x config.height` raster.
    pub fn demo(config: &RenderConfig) -> Self {
        let mut scene = Self::new(config, crate::color::WHITE);
        let w = config.width as f64;
        let h = config.height as f64;
        let step = config.step;

        shapes::add_box(
            &mut scene.polygons,
            0.1 * w,
            0.9 * h,
            0.0,
            0.2 * w,
            0.2 * h,
            0.2 * w,
        );
        shapes::add_sphere(&mut scene.polygons, 0.7 * w, 0.75 * h, 0.0, 0.15 * w, step);
        shapes::add_torus(
            &mut scene.polygons,
            0.3 * w,
            0.35 * h,
            0.0,
            0.05 * w,
            0.15 * w,
            step,
        );

        shapes::add_circle(&mut scene.edges, 0.75 * w, 0.3 * h, 0.0, 0.12 * w, step);
        shapes::add_curve(
            &mut scene.edges,
            [
                (0.05 * w, 0.05 * h),
                (0.95 * w, 0.05 * h),
                (0.0, 0.6 * h),
                (0.0, -0.6 * h),
            ],
            step,
            CurveKind::Hermite,
        );
        shapes::add_curve(
            &mut scene.edges,
            [
                (0.05 * w, 0.55 * h),
                (0.3 * w, 0.7 * h),
                (0.6 * w, 0.4 * h),
                (0.95 * w, 0.55 * h),
            ],
            step,
            CurveKind::Bezier,
        );

        scene
    }

    /// Fills the polygons, then draws the edges on top. An empty list is
    /// skipped instead of being reported.
    pub fn render<T: PlotTarget + ?Sized>(&self, target: &mut T) -> Result<RenderStats, RenderError> {
        let mut stats = RenderStats::default();
        if !self.polygons.is_empty() {
            let filled = fill_triangles(&self.polygons, target)?;
            stats.drawn += filled.drawn;
            stats.culled += filled.culled;
        }
        if !self.edges.is_empty() {
            stats.drawn += draw_edges(&self.edges, target, self.edge_color)?.drawn;
        }
        info!(
            "rendered {} primitives ({} culled)",
            stats.drawn, stats.culled
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::BLACK;
    use crate::render::Screen;

    #[test]
    fn demo_scene_renders_into_screen() {
        let config = RenderConfig {
            width: 120,
            height: 120,
            step: 8,
            ..RenderConfig::default()
        };
        let scene = Scene::demo(&config);
        assert_eq!(
            scene.polygons.triangle_count(),
            12 + 2 * 8 * 7 + 2 * 8 * 8
        );
        assert_eq!(scene.edges.edge_count(), 3 * 8);

        let mut screen = Screen::new(config.width, config.height, BLACK);
        let stats = scene.render(&mut screen.as_framebuffer()).unwrap();
        assert!(stats.drawn > 0);
        assert!(stats.culled > 0);

        let painted = (0..120)
            .flat_map(|y| (0..120).map(move |x| (x, y)))
            .filter(|&(x, y)| screen.get_pixel(x, y) != Some(BLACK))
            .count();
        assert!(painted > 0);
    }

    #[test]
    fn lone_point_in_edges_is_reported() {
        let mut scene = Scene::new(&RenderConfig::default(), BLACK);
        scene.edges.append_point(0.0, 0.0, 0.0);
        let mut screen = Screen::new(4, 4, BLACK);
        assert!(scene.render(&mut screen.as_framebuffer()).is_err());
    }
}
