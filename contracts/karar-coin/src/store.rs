use crate::admin::AdminModule;
use crate::dates;
use crate::seed;
use crate::types::{DataKey, Error, Item, ItemDraft, ItemKind, ItemStatus, ItemSubject};
use soroban_sdk::{log, symbol_short, Address, Env, String, Vec};

/// Longest title, description, category or target/location accepted, in bytes
pub const MAX_TEXT_LEN: u32 = 1024;

pub struct ItemStore;

impl ItemStore {
    /// List every item of a kind in insertion order
    pub fn list(env: &Env, kind: ItemKind) -> Result<Vec<Item>, Error> {
        Self::ensure_seeded(env, kind)?;

        let mut items = Vec::new(env);
        for id in Self::ids(env, kind).iter() {
            match env.storage().persistent().get(&DataKey::Item(kind, id)) {
                Some(item) => items.push_back(item),
                None => log!(env, "dangling item id in index", id),
            }
        }
        Ok(items)
    }

    pub fn get(env: &Env, kind: ItemKind, id: u32) -> Result<Item, Error> {
        Self::ensure_seeded(env, kind)?;

        env.storage()
            .persistent()
            .get(&DataKey::Item(kind, id))
            .ok_or(Error::ItemNotFound)
    }

    pub fn exists(env: &Env, kind: ItemKind, id: u32) -> Result<bool, Error> {
        Self::ensure_seeded(env, kind)?;
        Ok(env.storage().persistent().has(&DataKey::Item(kind, id)))
    }

    /// Write the default catalogue the first time a kind is touched.
    ///
    /// Runs ahead of every read and write of a kind, so ids handed out by
    /// `add` always follow the catalogue. A kind that has held data once is
    /// never seeded again, even after it is emptied.
    pub fn ensure_seeded(env: &Env, kind: ItemKind) -> Result<(), Error> {
        if Self::is_seeded(env, kind) || !Self::ids(env, kind).is_empty() {
            return Ok(());
        }

        let config = AdminModule::get_config(env)?;
        if config.seed_defaults {
            Self::seed(env, kind);
        }
        Ok(())
    }

    /// Insert a new pending item with `id = max(existing) + 1`
    pub fn add(env: &Env, draft: ItemDraft, creator: Option<Address>) -> Result<Item, Error> {
        Self::validate(
            &draft.title,
            &draft.description,
            &draft.category,
            &draft.start_date,
            &draft.end_date,
            &draft.subject,
        )?;

        let kind = draft.kind();
        Self::ensure_seeded(env, kind)?;

        let mut ids = Self::ids(env, kind);
        let id = Self::next_id(&ids);

        let item = Item {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            start_date: draft.start_date,
            end_date: draft.end_date,
            participants: draft.participants,
            positive_votes: 0,
            negative_votes: 0,
            status: ItemStatus::PendingApproval,
            image: draft.image,
            creator,
            tags: draft.tags,
            subject: draft.subject,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Item(kind, id), &item);
        ids.push_back(id);
        env.storage().persistent().set(&DataKey::ItemIds(kind), &ids);

        // The kind now holds data, so defaults never overwrite the catalogue
        env.storage().instance().set(&DataKey::Seeded(kind), &true);

        env.events().publish(
            (symbol_short!("item"), symbol_short!("added")),
            (kind, id, item.creator.clone()),
        );

        Ok(item)
    }

    /// Replace a stored item, matched by kind and id.
    ///
    /// Status only moves through moderation, so the incoming status must
    /// match the stored one.
    pub fn update(env: &Env, item: &Item) -> Result<(), Error> {
        let kind = item.kind();
        let stored = Self::get(env, kind, item.id)?;
        if stored.status != item.status {
            return Err(Error::InvalidStatusTransition);
        }

        Self::validate(
            &item.title,
            &item.description,
            &item.category,
            &item.start_date,
            &item.end_date,
            &item.subject,
        )?;

        Self::save(env, item);

        env.events().publish(
            (symbol_short!("item"), symbol_short!("updated")),
            (kind, item.id),
        );

        Ok(())
    }

    pub fn remove(env: &Env, kind: ItemKind, id: u32) -> Result<(), Error> {
        if !Self::exists(env, kind, id)? {
            return Err(Error::ItemNotFound);
        }

        env.storage().persistent().remove(&DataKey::Item(kind, id));

        let mut ids = Self::ids(env, kind);
        if let Some(index) = ids.first_index_of(id) {
            ids.remove(index);
            env.storage().persistent().set(&DataKey::ItemIds(kind), &ids);
        }

        env.events().publish(
            (symbol_short!("item"), symbol_short!("removed")),
            (kind, id),
        );

        Ok(())
    }

    /// Persist an item without validation or events; callers own both
    pub(crate) fn save(env: &Env, item: &Item) {
        env.storage()
            .persistent()
            .set(&DataKey::Item(item.kind(), item.id), item);
    }

    fn ids(env: &Env, kind: ItemKind) -> Vec<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::ItemIds(kind))
            .unwrap_or_else(|| Vec::new(env))
    }

    fn next_id(ids: &Vec<u32>) -> u32 {
        ids.iter().max().map_or(1, |max| max + 1)
    }

    fn is_seeded(env: &Env, kind: ItemKind) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Seeded(kind))
            .unwrap_or(false)
    }

    fn seed(env: &Env, kind: ItemKind) {
        let mut ids = Vec::new(env);
        for item in seed::default_items(env, kind).iter() {
            Self::save(env, &item);
            ids.push_back(item.id);
        }

        env.storage().persistent().set(&DataKey::ItemIds(kind), &ids);
        env.storage().instance().set(&DataKey::Seeded(kind), &true);

        env.events().publish(
            (symbol_short!("item"), symbol_short!("seeded")),
            (kind, ids.len()),
        );
    }

    fn validate(
        title: &String,
        description: &String,
        category: &String,
        start_date: &String,
        end_date: &Option<String>,
        subject: &ItemSubject,
    ) -> Result<(), Error> {
        if title.len() == 0 || description.len() == 0 || category.len() == 0 {
            return Err(Error::EmptyField);
        }

        // A protest may be online, a boycott always names its target
        if let ItemSubject::Target(target) = subject {
            if target.len() == 0 {
                return Err(Error::EmptyField);
            }
        }

        for text in [title, description, category, subject.text()] {
            if text.len() > MAX_TEXT_LEN {
                return Err(Error::TextTooLong);
            }
        }

        dates::parse(start_date)?;
        if let Some(end_date) = end_date {
            dates::parse(end_date)?;
        }

        Ok(())
    }
}
