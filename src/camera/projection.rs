use glam::{Vec2, Vec3};

/// Pixel size of the interaction surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport; zero dimensions are bumped to one pixel.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Width over height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Surface pixels to normalized device coordinates (`[-1, 1]`, +Y up).
    #[must_use]
    pub fn to_ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            (screen.x / self.width) * 2.0 - 1.0,
            -(screen.y / self.height) * 2.0 + 1.0,
        )
    }

    /// Normalized device coordinates back to surface pixels.
    #[must_use]
    pub fn to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

/// Half-line from `origin` along unit `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start point in world space.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

/// Plane `normal · p + constant = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed distance term.
    pub constant: f32,
}

impl Plane {
    /// Plane facing +Z containing every point with `z == depth`.
    #[must_use]
    pub fn facing_z(depth: f32) -> Self {
        Self {
            normal: Vec3::Z,
            constant: -depth,
        }
    }

    /// Signed distance from `point` to the plane.
    #[must_use]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }

    /// Where `ray` crosses the plane, or `None` if it runs parallel to it
    /// or points away from it.
    #[must_use]
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let denom = self.normal.dot(ray.direction);
        if denom.abs() < f32::EPSILON {
            if self.distance_to(ray.origin).abs() < f32::EPSILON {
                return Some(ray.origin);
            }
            return None;
        }

        let t = -self.distance_to(ray.origin) / denom;
        (t >= 0.0).then(|| ray.origin + ray.direction * t)
    }
}

/// Screen-to-world ray casting supplied by the rendering environment.
///
/// Implementors only need the viewport and a ray through a point in
/// normalized device coordinates; plane intersection is provided.
pub trait ScreenProjector {
    /// Current pixel size of the interaction surface.
    fn viewport(&self) -> Viewport;

    /// Ray from the camera through `ndc`.
    fn ray_through(&self, ndc: Vec2) -> Ray;

    /// World point where the ray through `ndc` meets `plane`.
    fn project_to_plane(&self, ndc: Vec2, plane: &Plane) -> Option<Vec3> {
        plane.intersect(&self.ray_through(ndc))
    }

    /// World point where the ray through surface pixel `screen` meets
    /// `plane`.
    fn project_screen_to_plane(
        &self,
        screen: Vec2,
        plane: &Plane,
    ) -> Option<Vec3> {
        self.project_to_plane(self.viewport().to_ndc(screen), plane)
    }
}
