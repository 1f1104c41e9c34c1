use crate::store::{ItemStore, MAX_TEXT_LEN};
use crate::types::{Error, Item, ItemFilter, ItemKind, SearchResults};
use soroban_sdk::{Env, String, Vec};

const BUF_LEN: usize = MAX_TEXT_LEN as usize;

pub struct ItemSearch;

impl ItemSearch {
    /// Case-insensitive substring search over title, description, category
    /// and target/location of every item. An empty query finds nothing.
    pub fn search(env: &Env, query: &String) -> Result<SearchResults, Error> {
        let needle = Needle::new(query)?;

        let mut results = SearchResults {
            boycotts: Vec::new(env),
            protests: Vec::new(env),
        };
        if needle.is_empty() {
            return Ok(results);
        }

        for kind in [ItemKind::Boycott, ItemKind::Protest] {
            let hits = match kind {
                ItemKind::Boycott => &mut results.boycotts,
                ItemKind::Protest => &mut results.protests,
            };
            for item in ItemStore::list(env, kind)?.iter() {
                if needle.found_in_any(&[
                    &item.title,
                    &item.description,
                    &item.category,
                    item.subject.text(),
                ]) {
                    hits.push_back(item);
                }
            }
        }

        Ok(results)
    }

    /// Items of one kind matching every set field of `filter`
    pub fn filter(env: &Env, kind: ItemKind, filter: &ItemFilter) -> Result<Vec<Item>, Error> {
        let needle = match &filter.query {
            Some(query) => Some(Needle::new(query)?),
            None => None,
        };

        let mut matches = Vec::new(env);
        for item in ItemStore::list(env, kind)?.iter() {
            if filter.status.map_or(false, |status| status != item.status) {
                continue;
            }
            if filter
                .category
                .as_ref()
                .map_or(false, |category| *category != item.category)
            {
                continue;
            }
            if let Some(needle) = &needle {
                if !needle.found_in_any(&[&item.title, item.subject.text()]) {
                    continue;
                }
            }
            matches.push_back(item);
        }

        Ok(matches)
    }
}

/// A case-folded query
struct Needle {
    buf: [u8; BUF_LEN],
    len: usize,
}

impl Needle {
    fn new(query: &String) -> Result<Self, Error> {
        let len = query.len() as usize;
        if len > BUF_LEN {
            return Err(Error::TextTooLong);
        }

        let mut buf = [0u8; BUF_LEN];
        query.copy_into_slice(&mut buf[..len]);
        fold_case(&mut buf[..len]);
        Ok(Self { buf, len })
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn found_in_any(&self, fields: &[&String]) -> bool {
        fields.iter().any(|field| self.found_in(field))
    }

    fn found_in(&self, text: &String) -> bool {
        let len = text.len() as usize;
        if self.len == 0 {
            return true;
        }
        if len < self.len || len > BUF_LEN {
            return false;
        }

        let mut haystack = [0u8; BUF_LEN];
        text.copy_into_slice(&mut haystack[..len]);
        fold_case(&mut haystack[..len]);

        let needle = &self.buf[..self.len];
        haystack[..len].windows(self.len).any(|window| window == needle)
    }
}

// Lower-cases ASCII, the Latin-1 capitals (Ç, Ö, Ü, ...) plus Ğ and Ş in
// place. Every mapping keeps the UTF-8 length. İ is left alone.
fn fold_case(text: &mut [u8]) {
    for i in 0..text.len() {
        let b = text[i];
        if b.is_ascii_uppercase() {
            text[i] = b.to_ascii_lowercase();
            continue;
        }

        let Some(&next) = text.get(i + 1) else {
            break;
        };
        match (b, next) {
            // U+00C0..U+00DE except the multiplication sign
            (0xC3, 0x80..=0x9E) if next != 0x97 => text[i + 1] = next + 0x20,
            // Ğ -> ğ, Ş -> ş
            (0xC4, 0x9E) | (0xC5, 0x9E) => text[i + 1] = 0x9F,
            _ => {}
        }
    }
}

