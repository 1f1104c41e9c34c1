use crate::dates;
use crate::store::ItemStore;
use crate::types::{Error, Item, ItemKind, ItemStatus, PendingApproval};
use soroban_sdk::{symbol_short, Env, String, Vec};

/// Moves proposals out of `Onay Bekliyor`.
///
/// The only transitions are pending -> active and pending -> rejected.
/// Repeating the transition that already happened is accepted and changes
/// nothing; any other transition out of a terminal status is refused.
pub struct ModerationWorkflow;

impl ModerationWorkflow {
    pub fn approve(env: &Env, kind: ItemKind, id: u32) -> Result<Item, Error> {
        Self::transition(env, kind, id, ItemStatus::Active)
    }

    pub fn reject(env: &Env, kind: ItemKind, id: u32) -> Result<Item, Error> {
        Self::transition(env, kind, id, ItemStatus::Rejected)
    }

    /// Pending boycotts then protests, newest start date first
    pub fn pending_approvals(env: &Env) -> Result<Vec<PendingApproval>, Error> {
        let mut pending: Vec<PendingApproval> = Vec::new(env);
        let mut keys: Vec<i64> = Vec::new(env);

        for kind in [ItemKind::Boycott, ItemKind::Protest] {
            for item in ItemStore::list(env, kind)?.iter() {
                if item.status != ItemStatus::PendingApproval {
                    continue;
                }

                let key = dates::day_number(&item.start_date).unwrap_or(i64::MIN);

                // Stable insert: after every entry that is at least as recent
                let mut index = 0;
                while index < keys.len() && keys.get_unchecked(index) >= key {
                    index += 1;
                }

                keys.insert(index, key);
                pending.insert(
                    index,
                    PendingApproval {
                        kind,
                        type_label: String::from_str(env, kind.label()),
                        id: item.id,
                        title: item.title.clone(),
                        requester: item.creator.clone(),
                        date: item.start_date.clone(),
                    },
                );
            }
        }

        Ok(pending)
    }

    fn transition(env: &Env, kind: ItemKind, id: u32, target: ItemStatus) -> Result<Item, Error> {
        let mut item = ItemStore::get(env, kind, id)?;

        if item.status == target {
            return Ok(item);
        }

        if item.status != ItemStatus::PendingApproval {
            return Err(Error::InvalidStatusTransition);
        }

        item.status = target;
        ItemStore::save(env, &item);

        let action = match target {
            ItemStatus::Active => symbol_short!("approved"),
            _ => symbol_short!("rejected"),
        };
        env.events()
            .publish((symbol_short!("item"), action), (kind, id));

        Ok(item)
    }
}
