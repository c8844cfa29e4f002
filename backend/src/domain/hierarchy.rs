//! Read-only store over the organisational hierarchy.
//!
//! The store is built once from seed data and validated on construction, so
//! every lookup can assume a well-formed forest: unique ids, resolvable
//! parents, movement roots, and children exactly one level below their
//! parent.

use std::collections::{BTreeMap, HashMap, VecDeque};

use super::access::AccessScope;
use super::group::{Group, GroupId, GroupType};

/// Errors raised while building or querying the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// Two groups share an identifier.
    #[error("duplicate group id {id}")]
    DuplicateId {
        /// The repeated identifier.
        id: GroupId,
    },
    /// A group points at a parent that does not exist.
    #[error("group {id} references unknown parent {parent}")]
    UnknownParent {
        /// Offending group.
        id: GroupId,
        /// Missing parent.
        parent: GroupId,
    },
    /// A parentless group is not a movement.
    #[error("root group {id} must be a movement, found {group_type}")]
    RootNotMovement {
        /// Offending group.
        id: GroupId,
        /// Its declared type.
        group_type: GroupType,
    },
    /// A child is not exactly one level below its parent.
    #[error("group {id} ({group_type}) cannot sit under {parent} ({parent_type})")]
    WrongLevel {
        /// Offending group.
        id: GroupId,
        /// Its declared type.
        group_type: GroupType,
        /// Its parent.
        parent: GroupId,
        /// The parent's type.
        parent_type: GroupType,
    },
    /// No group has the requested identifier.
    #[error("group {id} not found")]
    NotFound {
        /// Requested identifier.
        id: GroupId,
    },
}

/// Validated, immutable collection of groups with parent/child indexes.
///
/// # Examples
/// ```
/// use zoe_api::domain::{Group, GroupId, GroupStore, GroupType};
///
/// let root = Group {
///     id: GroupId::new(1),
///     name: "Worship Harvest Global".to_owned(),
///     group_type: GroupType::Movement,
///     parent_id: None,
///     privacy: "Public".to_owned(),
///     details: String::new(),
///     member_count: 0,
///     address: None,
///     meta_data: None,
/// };
/// let store = GroupStore::new(vec![root]).expect("valid hierarchy");
/// assert!(store.get_by_id(GroupId::new(1)).is_ok());
/// assert!(store.children(GroupId::new(1)).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GroupStore {
    groups: Vec<Group>,
    index: HashMap<GroupId, usize>,
    children: HashMap<GroupId, Vec<usize>>,
}

impl GroupStore {
    /// Validate `groups` and build the lookup indexes. Seed order is kept.
    pub fn new(groups: Vec<Group>) -> Result<Self, HierarchyError> {
        let mut index = HashMap::with_capacity(groups.len());
        for (position, group) in groups.iter().enumerate() {
            if index.insert(group.id, position).is_some() {
                return Err(HierarchyError::DuplicateId { id: group.id });
            }
        }

        let mut children: HashMap<GroupId, Vec<usize>> = HashMap::new();
        for (position, group) in groups.iter().enumerate() {
            let Some(parent_id) = group.parent_id else {
                if group.group_type != GroupType::Movement {
                    return Err(HierarchyError::RootNotMovement {
                        id: group.id,
                        group_type: group.group_type,
                    });
                }
                continue;
            };
            let parent = index
                .get(&parent_id)
                .and_then(|slot| groups.get(*slot))
                .ok_or(HierarchyError::UnknownParent {
                    id: group.id,
                    parent: parent_id,
                })?;
            if group.group_type.parent_type() != Some(parent.group_type) {
                return Err(HierarchyError::WrongLevel {
                    id: group.id,
                    group_type: group.group_type,
                    parent: parent_id,
                    parent_type: parent.group_type,
                });
            }
            children.entry(parent_id).or_default().push(position);
        }

        Ok(Self {
            groups,
            index,
            children,
        })
    }

    /// Look up a group by identifier.
    pub fn get_by_id(&self, id: GroupId) -> Result<&Group, HierarchyError> {
        self.index
            .get(&id)
            .and_then(|slot| self.groups.get(*slot))
            .ok_or(HierarchyError::NotFound { id })
    }

    /// Direct children of `id`, in seed order. Unknown ids have no children.
    #[must_use]
    pub fn children(&self, id: GroupId) -> Vec<&Group> {
        self.children
            .get(&id)
            .map(|slots| self.resolve(slots))
            .unwrap_or_default()
    }

    /// Every group of the given type, in seed order.
    #[must_use]
    pub fn by_type(&self, group_type: GroupType) -> Vec<&Group> {
        self.groups
            .iter()
            .filter(|group| group.group_type == group_type)
            .collect()
    }

    /// Number of groups per category id. Every category is present, even
    /// when empty.
    #[must_use]
    pub fn category_summary(&self) -> BTreeMap<u32, usize> {
        let mut summary: BTreeMap<u32, usize> = GroupType::ALL
            .into_iter()
            .map(|kind| (kind.category_id(), 0))
            .collect();
        for group in &self.groups {
            *summary.entry(group.category_id()).or_insert(0) += 1;
        }
        summary
    }

    /// Parent of `id`, if the group exists and is not a root.
    #[must_use]
    pub fn parent(&self, id: GroupId) -> Option<&Group> {
        let parent_id = self.get_by_id(id).ok()?.parent_id?;
        self.get_by_id(parent_id).ok()
    }

    /// Every group below `id`, breadth first, excluding `id` itself.
    #[must_use]
    pub fn descendants(&self, id: GroupId) -> Vec<&Group> {
        let mut found = Vec::new();
        let mut queue = VecDeque::from([id]);
        while let Some(current) = queue.pop_front() {
            for child in self.children(current) {
                queue.push_back(child.id);
                found.push(child);
            }
        }
        found
    }

    /// `scope` widened so each listed group also covers everything below it.
    ///
    /// Ids unknown to the store are kept as they are.
    #[must_use]
    pub fn subtree_scope(&self, scope: &AccessScope) -> AccessScope {
        scope.expanded_with(|id| {
            std::iter::once(id)
                .chain(self.descendants(id).into_iter().map(|group| group.id))
                .collect()
        })
    }

    /// Nearest ancestor of `id` (or `id` itself) with the given type.
    #[must_use]
    pub fn ancestor_of_type(&self, id: GroupId, group_type: GroupType) -> Option<&Group> {
        let mut current = self.get_by_id(id).ok()?;
        loop {
            if current.group_type == group_type {
                return Some(current);
            }
            current = self.get_by_id(current.parent_id?).ok()?;
        }
    }

    /// All groups in seed order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Sum of `member_count` across every group.
    #[must_use]
    pub fn total_members(&self) -> u64 {
        self.groups
            .iter()
            .map(|group| u64::from(group.member_count))
            .sum()
    }

    /// Number of groups in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the store holds no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn resolve(&self, slots: &[usize]) -> Vec<&Group> {
        slots
            .iter()
            .filter_map(|slot| self.groups.get(*slot))
            .collect()
    }
}
