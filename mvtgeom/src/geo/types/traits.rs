use std::fmt::Debug;

/// Defines the basic interface shared by all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns the total number of coordinates stored in the geometry, over all of its parts.
	///
	/// The encoder uses this as a capacity hint: every vertex yields at most one draw command.
	fn vertex_count(&self) -> usize;
}

/// Represents composite geometries that are ordered collections of simpler elements.
/// For example, a polygon is made of rings, and a multi line string is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Returns an iterator over the elements in their stored order.
	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_vec().iter()
	}

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
