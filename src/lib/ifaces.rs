// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use serde::{
    ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer,
};

use crate::Iface;

/// The interfaces of a state, indexed by their unique name.
///
/// Deserializes from the document's interface list (a later entry with a
/// duplicated name replaces the earlier one) and serializes back to a list
/// sorted by interface name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Interfaces {
    pub(crate) data: HashMap<String, Iface>,
}

impl<'de> Deserialize<'de> for Interfaces {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut ret = Self::default();
        for iface in <Vec<Iface> as Deserialize>::deserialize(deserializer)? {
            ret.push(iface);
        }
        Ok(ret)
    }
}

impl Serialize for Interfaces {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let ifaces = self.to_vec();
        let mut seq = serializer.serialize_seq(Some(ifaces.len()))?;
        for iface in ifaces {
            seq.serialize_element(iface)?;
        }
        seq.end()
    }
}

impl Interfaces {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Internal interfaces as a `Vec` sorted by name.
    pub fn to_vec(&self) -> Vec<&Iface> {
        let mut ifaces: Vec<&Iface> = self.data.values().collect();
        ifaces.sort_unstable_by_key(|iface| iface.name.as_str());
        ifaces
    }

    pub fn get(&self, iface_name: &str) -> Option<&Iface> {
        self.data.get(iface_name)
    }

    pub fn get_mut(&mut self, iface_name: &str) -> Option<&mut Iface> {
        self.data.get_mut(iface_name)
    }

    pub fn contains(&self, iface_name: &str) -> bool {
        self.data.contains_key(iface_name)
    }

    /// Insert the specified [Iface], replacing any interface holding the
    /// same name.
    pub fn push(&mut self, iface: Iface) {
        self.data.insert(iface.name.clone(), iface);
    }

    pub fn remove(&mut self, iface_name: &str) -> Option<Iface> {
        self.data.remove(iface_name)
    }

    /// The iteration order is unsorted.
    pub fn iter(&self) -> impl Iterator<Item = &Iface> {
        self.data.values()
    }

    /// The iteration order is unsorted.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Iface> {
        self.data.values_mut()
    }

    /// Interface names sorted alphabetically.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.data.keys().map(|n| n.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Iface) -> bool,
    {
        self.data.retain(|_, iface| keep(iface));
    }
}
