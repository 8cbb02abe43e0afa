use crate::foundation::core::ColorMode;

/// Global color table shared by every frame of a run. Index 0 is always black.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Index 0 black, index 1 white.
    pub fn two_color() -> Self {
        Self {
            colors: vec![[0, 0, 0], [255, 255, 255]],
        }
    }

    /// 256 entries: black background at 0, then a red/green/blue ramp over 1..=255.
    pub fn gradient() -> Self {
        let mut colors = Vec::with_capacity(256);
        colors.push([0, 0, 0]);
        for i in 1..=255u32 {
            let (r, g) = if i < 128 {
                (i * 2, 255 - i * 2)
            } else {
                (255, (i - 128) * 2)
            };
            colors.push([r as u8, g as u8, (255 - i) as u8]);
        }
        Self { colors }
    }

    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Gradient => Self::gradient(),
            ColorMode::Mono => Self::two_color(),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: u8) -> Option<[u8; 3]> {
        self.colors.get(usize::from(index)).copied()
    }

    /// Flat `r, g, b, r, g, b, ...` bytes, the layout GIF color tables use.
    pub fn as_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
