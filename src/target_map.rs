use std::collections::HashMap;

use crate::target::Target;

/// Targets keyed by name, iterated in the order names were first declared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetMap {
	vec: Vec<(String, Target)>,
	map: HashMap<String, usize>,
}

impl TargetMap {
	pub fn new() -> Self {
		TargetMap { vec: Vec::new(), map: HashMap::new() }
	}
	pub fn len(&self) -> usize {
		self.vec.len()
	}
	pub fn is_empty(&self) -> bool {
		self.vec.is_empty()
	}
	pub fn get(&self, name: &str) -> Option<&Target> {
		let index = *self.map.get(name)?;
		Some(&self.vec[index].1)
	}
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Target> {
		let index = *self.map.get(name)?;
		Some(&mut self.vec[index].1)
	}
	/// Inserts `target` under `name`. If the name is already present the old target is replaced
	/// wholesale (nothing is merged) but keeps its position in iteration order. Returns the
	/// replaced target.
	pub fn insert(&mut self, name: String, target: Target) -> Option<Target> {
		if let Some(&index) = self.map.get(&name) {
			return Some(std::mem::replace(&mut self.vec[index].1, target));
		}
		self.map.insert(name.clone(), self.vec.len());
		self.vec.push((name, target));
		None
	}
	pub fn iter(&self) -> TargetMapIter<'_> {
		TargetMapIter { index: 0, map: self }
	}
}

impl<'map> IntoIterator for &'map TargetMap {
	type Item = (&'map str, &'map Target);
	type IntoIter = TargetMapIter<'map>;

	fn into_iter(self) -> TargetMapIter<'map> {
		self.iter()
	}
}

pub struct TargetMapIter<'map> {
	index: usize,
	map: &'map TargetMap,
}

impl<'map> Iterator for TargetMapIter<'map> {
	type Item = (&'map str, &'map Target);

	fn next(&mut self) -> Option<Self::Item> {
		let (name, target) = self.map.vec.get(self.index)?;
		self.index += 1;
		Some((name.as_str(), target))
	}
}
