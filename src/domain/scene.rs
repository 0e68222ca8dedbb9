//! Ordered shape collection

use super::shape::Shape;

/// Shapes in paint order; append-only during a session
#[derive(Clone, Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of everything drawn so far, returning its index
    pub fn push(&mut self, shape: Shape) -> usize {
        log::debug!("Scene: adding {} at index {}", shape.kind(), self.shapes.len());
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Vec2;

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.push(Shape::grid(1.0)), 0);
        assert_eq!(scene.push(Shape::point(Vec2::new(1.0, 2.0))), 1);
        assert_eq!(scene.len(), 2);
        assert!(matches!(scene.shapes()[0], Shape::CoordinateGrid(_)));
        assert!(matches!(scene.shapes()[1], Shape::Point(_)));
    }
}
