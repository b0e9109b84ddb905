use crate::error::StoreError;
use crate::shape::{Shape, ShapeId, ShapeKind, ShapeRecord};
use crate::surface::Handle;

/// Ordered collection of every shape in the drawing.
///
/// Order is rendering order and is preserved through save/load.
#[derive(Debug)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    next_id: u64,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new, not yet rendered shape
    pub fn add(&mut self, kind: ShapeKind, color: impl Into<String>, size: u32) -> ShapeId {
        let id = ShapeId::new(self.next_id);
        self.next_id += 1;
        self.shapes.push(Shape::new(id, kind, color.into(), size));
        id
    }

    pub fn add_record(&mut self, record: ShapeRecord) -> ShapeId {
        self.add(record.kind, record.color, record.size)
    }

    pub fn remove(&mut self, id: ShapeId) -> Result<Shape, StoreError> {
        let index = self
            .shapes
            .iter()
            .position(|shape| shape.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.shapes.remove(index))
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    /// Which shape, if any, is currently drawn with `handle`
    pub fn find_by_handle(&self, handle: Handle) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|shape| shape.handle() == Some(handle))
    }

    pub fn set_handle(&mut self, id: ShapeId, handle: Option<Handle>) -> Result<(), StoreError> {
        let shape = self.get_mut(id).ok_or(StoreError::NotFound(id))?;
        shape.set_handle(handle);
        Ok(())
    }

    /// Forget every render handle, e.g. after the canvas was wiped
    pub fn clear_handles(&mut self) {
        for shape in &mut self.shapes {
            shape.set_handle(None);
        }
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Replace the whole contents with freshly created shapes
    pub fn replace_all(&mut self, records: Vec<ShapeRecord>) -> Vec<ShapeId> {
        self.shapes.clear();
        records
            .into_iter()
            .map(|record| self.add_record(record))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn records(&self) -> Vec<ShapeRecord> {
        self.shapes.iter().map(Shape::to_record).collect()
    }

    /// Encode every shape as a JSON array of `{kind, color, size}` records
    pub fn serialize(&self) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec_pretty(&self.records()).map_err(StoreError::Serialize)
    }

    /// Decode a shape file. Never touches any store.
    pub fn deserialize(bytes: &[u8]) -> Result<Vec<ShapeRecord>, StoreError> {
        serde_json::from_slice(bytes).map_err(StoreError::Parse)
    }
}
