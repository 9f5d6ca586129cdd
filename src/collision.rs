//! Bounding-region collision between positioned sprites.

/// Size of a sprite plus the part of it that actually collides.
///
/// `solid` is relative to the sprite's top-left corner. Ships are solid over
/// their whole frame; laser sprites only over the beam in the middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub width: i32,
    pub height: i32,
    pub solid: (i32, i32, i32, i32),
}

impl Footprint {
    pub const fn full(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            solid: (0, 0, width, height),
        }
    }

    pub const fn with_solid(width: i32, height: i32, solid: (i32, i32, i32, i32)) -> Self {
        Self {
            width,
            height,
            solid,
        }
    }

    /// Solid region placed at world position (`x`, `y`)
    pub fn hitbox_at(&self, x: i32, y: i32) -> Hitbox {
        let (sx, sy, sw, sh) = self.solid;
        Hitbox {
            x: x + sx,
            y: y + sy,
            width: sw,
            height: sh,
        }
    }
}

/// Axis-aligned rectangle in world units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Hitbox {
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Anything with a solid region in the world
pub trait Collider {
    fn hitbox(&self) -> Hitbox;
}

impl Collider for Hitbox {
    fn hitbox(&self) -> Hitbox {
        *self
    }
}

/// True if the solid regions of `a` and `b` share any area.
pub fn collide<A: Collider + ?Sized, B: Collider + ?Sized>(a: &A, b: &B) -> bool {
    a.hitbox().overlaps(&b.hitbox())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, width: i32, height: i32) -> Hitbox {
        Hitbox {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_overlapping_boxes_collide() {
        assert!(collide(&rect(0, 0, 50, 50), &rect(25, 25, 50, 50)));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        assert!(!collide(&rect(0, 0, 50, 50), &rect(50, 0, 50, 50)));
        assert!(!collide(&rect(0, 0, 50, 50), &rect(0, 50, 50, 50)));
    }

    #[test]
    fn test_contained_box_collides() {
        assert!(collide(&rect(0, 0, 75, 75), &rect(10, 10, 5, 5)));
    }

    #[test]
    fn test_hitbox_uses_solid_region() {
        let laser = Footprint::with_solid(50, 50, (22, 10, 6, 30));
        let hitbox = laser.hitbox_at(100, 200);
        assert_eq!(hitbox, rect(122, 210, 6, 30));

        // Inside the sprite frame but outside the beam
        assert!(!collide(&hitbox, &rect(100, 200, 20, 50)));
        assert!(collide(&hitbox, &rect(100, 200, 23, 50)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_collide_is_symmetric(
                ax in -200i32..200, ay in -200i32..200, aw in 1i32..100, ah in 1i32..100,
                bx in -200i32..200, by in -200i32..200, bw in 1i32..100, bh in 1i32..100,
            ) {
                let a = rect(ax, ay, aw, ah);
                let b = rect(bx, by, bw, bh);
                prop_assert_eq!(collide(&a, &b), collide(&b, &a));
            }

            #[test]
            fn test_far_apart_boxes_never_collide(
                ax in -200i32..200, ay in -200i32..200, aw in 1i32..100, ah in 1i32..100,
                bw in 1i32..100, bh in 1i32..100,
                gap in 0i32..50,
                horizontal in prop::bool::ANY,
            ) {
                let a = rect(ax, ay, aw, ah);
                // Centres are at least the sum of the half-extents apart on one axis
                let b = if horizontal {
                    rect(ax + aw + gap, ay, bw, bh)
                } else {
                    rect(ax, ay + ah + gap, bw, bh)
                };
                prop_assert!(!collide(&a, &b));
                prop_assert!(!collide(&b, &a));
            }
        }
    }
}
