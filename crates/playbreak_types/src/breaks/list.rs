//! Validated break lists.

use std::{fs, path::Path};

use crate::error::BreakListError;

use super::{entry::Break, list_config::ListConfig};

/// An immutable, validated sequence of breaks.
///
/// The terminating sentinel is checked at construction and then dropped, so
/// the stored entries are exactly the playable ones. Walking past the last
/// entry is the same as reaching the sentinel.
///
/// # Examples
///
/// Porting a sentinel-terminated table:
///
/// ```
/// use playbreak_types::breaks::{Break, BreakList};
///
/// let list = BreakList::from_terminated(vec![
///     Break::new(0, 4).with_sound("a"),
///     Break::new(5, 9),
///     Break::sentinel(),
/// ])?;
/// assert_eq!(list.len(), 2);
/// # Ok::<(), playbreak_types::BreakListError>(())
/// ```
///
/// A table that lost its sentinel is rejected:
///
/// ```
/// use playbreak_types::breaks::{Break, BreakList};
///
/// assert!(BreakList::from_terminated(vec![Break::new(0, 4)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreakList {
	entries: Vec<Break>,
}

impl BreakList {
	/// Builds a list from a sentinel-terminated table using the default scan bound.
	///
	/// # Errors
	///
	/// Returns [`BreakListError::MissingSentinel`] if no sentinel is found
	/// within the bound.
	pub fn from_terminated<I>(table: I) -> Result<Self, BreakListError>
	where
		I: IntoIterator<Item = Break>,
	{
		Self::from_terminated_with_config(table, &ListConfig::default())
	}

	/// Builds a list from a sentinel-terminated table.
	///
	/// Scanning stops at the first sentinel; anything after it is ignored.
	///
	/// # Errors
	///
	/// Returns [`BreakListError::MissingSentinel`] if the table ends, or
	/// `config.max_entries` entries were scanned, without a sentinel.
	pub fn from_terminated_with_config<I>(
		table: I,
		config: &ListConfig,
	) -> Result<Self, BreakListError>
	where
		I: IntoIterator<Item = Break>,
	{
		let mut entries = Vec::new();
		for (index, entry) in table.into_iter().enumerate() {
			if index >= config.max_entries {
				return Err(BreakListError::MissingSentinel {
					scanned: index,
				});
			}
			if entry.is_sentinel() {
				return Ok(Self {
					entries,
				});
			}
			entries.push(entry);
		}

		Err(BreakListError::MissingSentinel {
			scanned: entries.len(),
		})
	}

	/// Builds a list from plain entries, without a sentinel, using the default bound.
	///
	/// # Errors
	///
	/// See [`from_entries_with_config`](Self::from_entries_with_config).
	pub fn from_entries(entries: Vec<Break>) -> Result<Self, BreakListError> {
		Self::from_entries_with_config(entries, &ListConfig::default())
	}

	/// Builds a list from plain entries, without a sentinel.
	///
	/// # Errors
	///
	/// Returns [`BreakListError::UnexpectedSentinel`] if any entry is a
	/// sentinel, or [`BreakListError::TooLong`] if the list plus its implied
	/// sentinel exceeds `config.max_entries`.
	pub fn from_entries_with_config(
		entries: Vec<Break>,
		config: &ListConfig,
	) -> Result<Self, BreakListError> {
		if let Some(index) = entries.iter().position(Break::is_sentinel) {
			return Err(BreakListError::UnexpectedSentinel {
				index,
			});
		}
		if entries.len() >= config.max_entries {
			return Err(BreakListError::TooLong {
				len: entries.len(),
				limit: config.max_entries,
			});
		}

		Ok(Self {
			entries,
		})
	}

	/// Parses a JSON array of breaks.
	///
	/// A sentinel in the array is optional. When present the array is treated
	/// as a terminated table, otherwise every entry is playable.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is malformed or the list fails validation.
	pub fn from_json(json: &str) -> Result<Self, BreakListError> {
		Self::from_json_with_config(json, &ListConfig::default())
	}

	/// Parses a JSON array of breaks with custom limits.
	///
	/// # Errors
	///
	/// Returns an error if the JSON is malformed or the list fails validation.
	pub fn from_json_with_config(json: &str, config: &ListConfig) -> Result<Self, BreakListError> {
		let table: Vec<Break> = serde_json::from_str(json)?;
		if table.iter().any(Break::is_sentinel) {
			Self::from_terminated_with_config(table, config)
		} else {
			Self::from_entries_with_config(table, config)
		}
	}

	/// Serializes the list as a sentinel-terminated JSON array.
	///
	/// # Errors
	///
	/// Returns an error if serialization fails.
	pub fn to_json(&self) -> Result<String, BreakListError> {
		Ok(serde_json::to_string_pretty(&self.to_terminated())?)
	}

	/// Loads a break list from a JSON file.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or fails validation.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BreakListError> {
		Self::open_with_config(path, &ListConfig::default())
	}

	/// Loads a break list from a JSON file with custom limits.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or fails validation.
	pub fn open_with_config<P: AsRef<Path>>(
		path: P,
		config: &ListConfig,
	) -> Result<Self, BreakListError> {
		let json = fs::read_to_string(path)?;
		Self::from_json_with_config(&json, config)
	}

	/// Saves the list to a JSON file.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be written.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), BreakListError> {
		fs::write(path, self.to_json()?)?;
		Ok(())
	}

	/// Returns the playable entries.
	pub fn entries(&self) -> &[Break] {
		&self.entries
	}

	/// Returns the entry at `index`, `None` once the sentinel is reached.
	pub fn get(&self, index: usize) -> Option<&Break> {
		self.entries.get(index)
	}

	/// Number of playable entries (sentinel excluded).
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the list has no playable entry.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the playable entries.
	pub fn iter(&self) -> std::slice::Iter<'_, Break> {
		self.entries.iter()
	}

	/// Iterates over every sound name referenced by the list, repeats included.
	pub fn sounds(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().filter_map(|entry| entry.sound.as_deref())
	}

	/// Returns the entries followed by a sentinel, as the engine tables are laid out.
	pub fn to_terminated(&self) -> Vec<Break> {
		let mut table = Vec::with_capacity(self.entries.len() + 1);
		table.extend(self.entries.iter().cloned());
		table.push(Break::sentinel());
		table
	}
}

impl<'a> IntoIterator for &'a BreakList {
	type Item = &'a Break;
	type IntoIter = std::slice::Iter<'a, Break>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

impl std::fmt::Display for BreakList {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "BreakList({} breaks)", self.entries.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vars::VarRef;

	#[test]
	fn test_terminated_stops_at_first_sentinel() {
		let list = BreakList::from_terminated(vec![
			Break::new(0, 1),
			Break::sentinel(),
			Break::new(2, 3),
		])
		.unwrap();
		assert_eq!(list.len(), 1);
		assert!(list.get(1).is_none());
	}

	#[test]
	fn test_any_negative_first_frame_terminates() {
		let list = BreakList::from_terminated(vec![Break::new(0, 1), Break::new(-5, 0)]).unwrap();
		assert_eq!(list.len(), 1);
	}

	#[test]
	fn test_missing_sentinel() {
		let err = BreakList::from_terminated(vec![Break::new(0, 1), Break::new(2, 3)]).unwrap_err();
		assert!(matches!(
			err,
			BreakListError::MissingSentinel {
				scanned: 2
			}
		));
	}

	#[test]
	fn test_scan_is_bounded() {
		let table = std::iter::repeat(Break::new(0, 1));
		let err = BreakList::from_terminated_with_config(table, &ListConfig::new(8)).unwrap_err();
		assert!(matches!(
			err,
			BreakListError::MissingSentinel {
				scanned: 8
			}
		));
	}

	#[test]
	fn test_empty_list_is_valid() {
		let list = BreakList::from_terminated(vec![Break::sentinel()]).unwrap();
		assert!(list.is_empty());
	}

	#[test]
	fn test_from_entries_rejects_sentinel() {
		let err = BreakList::from_entries(vec![Break::new(0, 1), Break::sentinel()]).unwrap_err();
		assert!(matches!(
			err,
			BreakListError::UnexpectedSentinel {
				index: 1
			}
		));
	}

	#[test]
	fn test_from_entries_too_long() {
		let entries = vec![Break::new(0, 1); 4];
		let err = BreakList::from_entries_with_config(entries, &ListConfig::new(4)).unwrap_err();
		assert!(matches!(
			err,
			BreakListError::TooLong {
				len: 4,
				limit: 4
			}
		));
	}

	#[test]
	fn test_sounds_keeps_repeats() {
		let list = BreakList::from_entries(vec![
			Break::new(0, 1).with_sound("a"),
			Break::new(2, 3),
			Break::new(4, 5).with_sound("a"),
		])
		.unwrap();
		assert_eq!(list.sounds().collect::<Vec<_>>(), vec!["a", "a"]);
	}

	#[test]
	fn test_json_with_and_without_sentinel() {
		let open = r#"[{"first_frame": 0, "last_frame": 4, "sound": "a", "when": {"var": 1, "value": 2}}]"#;
		let list = BreakList::from_json(open).unwrap();
		assert_eq!(list.len(), 1);
		assert_eq!(list.entries()[0], Break::new(0, 4).with_sound("a").when(VarRef(1), 2));

		let terminated = list.to_json().unwrap();
		let reparsed = BreakList::from_json(&terminated).unwrap();
		assert_eq!(reparsed, list);
	}

	#[test]
	fn test_save_and_open() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("list.json");
		let list = BreakList::from_entries(vec![Break::new(3, 0).with_trigger(7)]).unwrap();

		list.save(&path).unwrap();
		assert_eq!(BreakList::open(&path).unwrap(), list);
	}
}
