use glam::Vec2;

const FIRST_SLOT_X: f32 = 150.0;
const SLOT_SPACING: f32 = 130.0;
const IMAGE_SIZE: f32 = 100.0;
const MIN_GAP: f32 = 10.0;

/// Where each face sits on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLayout {
    centers: Vec<Vec2>,
    image_size: f32,
}

impl FaceLayout {
    /// Lay out `count` faces in one row across the vertical middle.
    ///
    /// Faces start at x = 150 and step 130 to the right. When that row would
    /// run off the canvas the slots are spread evenly instead and the images
    /// shrink to keep a gap between neighbours.
    pub fn row(count: usize, width: f32, height: f32) -> Self {
        let y = height / 2.0;
        let last_edge = FIRST_SLOT_X + count.saturating_sub(1) as f32 * SLOT_SPACING + IMAGE_SIZE / 2.0;
        if last_edge <= width {
            let centers = (0..count)
                .map(|i| Vec2::new(FIRST_SLOT_X + i as f32 * SLOT_SPACING, y))
                .collect();
            return Self { centers, image_size: IMAGE_SIZE };
        }

        let spacing = width / (count as f32 + 1.0);
        let centers = (0..count)
            .map(|i| Vec2::new(spacing * (i as f32 + 1.0), y))
            .collect();
        let image_size = (spacing - MIN_GAP).clamp(1.0, IMAGE_SIZE);
        Self { centers, image_size }
    }

    pub fn center(&self, index: usize) -> Option<Vec2> {
        self.centers.get(index).copied()
    }

    pub fn centers(&self) -> &[Vec2] {
        &self.centers
    }

    pub fn image_size(&self) -> Vec2 {
        Vec2::splat(self.image_size)
    }

    /// Baseline of the name label under a slot.
    pub fn label_pos(&self, index: usize) -> Option<Vec2> {
        self.center(index)
            .map(|c| c + Vec2::new(0.0, self.image_size / 2.0 + 20.0))
    }

    /// Top-left and size of the highlight frame around a slot's image.
    pub fn highlight_rect(&self, index: usize) -> Option<(Vec2, Vec2)> {
        let size = Vec2::splat(self.image_size + 4.0);
        self.center(index).map(|c| (c - size / 2.0, size))
    }
}
