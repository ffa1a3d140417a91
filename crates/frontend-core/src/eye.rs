use glam::Vec3;

/// User-configured camera offset, read once per matrix rebuild.
pub trait EyeOffsetSource {
    fn eye_x(&self) -> f32;
    fn eye_y(&self) -> f32;
    fn eye_z(&self) -> f32;

    fn eye(&self) -> Vec3 {
        Vec3::new(self.eye_x(), self.eye_y(), self.eye_z())
    }
}

/// A fixed offset, e.g. the factory default of no offset at all.
impl EyeOffsetSource for Vec3 {
    fn eye_x(&self) -> f32 {
        self.x
    }
    fn eye_y(&self) -> f32 {
        self.y
    }
    fn eye_z(&self) -> f32 {
        self.z
    }
}

impl<T: EyeOffsetSource + ?Sized> EyeOffsetSource for std::sync::Arc<T> {
    fn eye_x(&self) -> f32 {
        (**self).eye_x()
    }
    fn eye_y(&self) -> f32 {
        (**self).eye_y()
    }
    fn eye_z(&self) -> f32 {
        (**self).eye_z()
    }
}
