/// Families of animated scalars that are triggered and settle together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationGroup {
    /// Camera angles and shifts; gates the 3-D matrix rebuild.
    Geometry,
    /// Canvas alpha and background noise.
    Alpha,
    /// Texture cutout corners; gates the sampling rectangle rebuild.
    Texture,
    /// Activity monitor overlay opacity.
    Monitors,
}

impl AnimationGroup {
    pub const ALL: [AnimationGroup; 4] = [
        AnimationGroup::Geometry,
        AnimationGroup::Alpha,
        AnimationGroup::Texture,
        AnimationGroup::Monitors,
    ];
}

/// The set of groups currently in motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveGroups {
    geometry: bool,
    alpha: bool,
    texture: bool,
    monitors: bool,
}

impl ActiveGroups {
    pub fn insert(&mut self, group: AnimationGroup) {
        *self.flag_mut(group) = true;
    }

    pub fn remove(&mut self, group: AnimationGroup) {
        *self.flag_mut(group) = false;
    }

    pub fn contains(&self, group: AnimationGroup) -> bool {
        match group {
            AnimationGroup::Geometry => self.geometry,
            AnimationGroup::Alpha => self.alpha,
            AnimationGroup::Texture => self.texture,
            AnimationGroup::Monitors => self.monitors,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.geometry || self.alpha || self.texture || self.monitors)
    }

    pub fn is_geometry_active(&self) -> bool {
        self.geometry
    }

    pub fn is_alpha_active(&self) -> bool {
        self.alpha
    }

    pub fn is_texture_active(&self) -> bool {
        self.texture
    }

    pub fn is_monitors_active(&self) -> bool {
        self.monitors
    }

    /// Active groups in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = AnimationGroup> + '_ {
        AnimationGroup::ALL
            .into_iter()
            .filter(move |g| self.contains(*g))
    }

    fn flag_mut(&mut self, group: AnimationGroup) -> &mut bool {
        match group {
            AnimationGroup::Geometry => &mut self.geometry,
            AnimationGroup::Alpha => &mut self.alpha,
            AnimationGroup::Texture => &mut self.texture,
            AnimationGroup::Monitors => &mut self.monitors,
        }
    }
}
