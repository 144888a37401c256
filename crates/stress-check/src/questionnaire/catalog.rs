use super::domain::{Domain, Item};
use std::ops::Range;

/// Number of items in the standard questionnaire.
pub const STANDARD_ITEM_COUNT: usize = 57;

/// Integrity failures in the item-to-domain partition or the reversal table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog holds {actual} items, expected {expected}")]
    WrongItemCount { expected: usize, actual: usize },
    #[error("item at position {position} declares index {declared}")]
    IndexMismatch { position: usize, declared: usize },
    #[error("reversal table holds {actual} flags, expected {expected}")]
    ReversalTableLength { expected: usize, actual: usize },
    #[error("domain {domain:?} is split: item {index} resumes it after another domain")]
    NonContiguousDomain { domain: Domain, index: usize },
    #[error("domain {domain:?} has no items")]
    EmptyDomain { domain: Domain },
    #[error("domain {domain:?} appears out of order at item {index}")]
    DomainOutOfOrder { domain: Domain, index: usize },
    #[error("domain {domain:?} spans {actual:?}, expected {expected:?}")]
    UnexpectedLayout {
        domain: Domain,
        expected: Range<usize>,
        actual: Range<usize>,
    },
}

/// Validated, ordered item list with contiguous domain ranges.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    items: Vec<Item>,
    ranges: [Range<usize>; 4],
}

impl ItemCatalog {
    /// Builds the 57-item questionnaire and checks it against the canonical layout.
    pub fn standard() -> Result<Self, CatalogError> {
        let catalog = Self::new(standard_items())?;

        if catalog.len() != STANDARD_ITEM_COUNT {
            return Err(CatalogError::WrongItemCount {
                expected: STANDARD_ITEM_COUNT,
                actual: catalog.len(),
            });
        }

        for domain in Domain::ordered() {
            let actual = catalog.domain_range(domain);
            let expected = domain.standard_range();
            if actual != expected {
                return Err(CatalogError::UnexpectedLayout {
                    domain,
                    expected,
                    actual,
                });
            }
        }

        Ok(catalog)
    }

    /// Validates an arbitrary item list: every domain present, contiguous, and in
    /// `Domain::ordered()` order, with indices matching positions.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut ranges: [Option<Range<usize>>; 4] = Default::default();
        let mut previous: Option<Domain> = None;

        for (position, item) in items.iter().enumerate() {
            if item.index != position {
                return Err(CatalogError::IndexMismatch {
                    position,
                    declared: item.index,
                });
            }

            let slot = &mut ranges[item.domain.slot()];
            match slot {
                Some(range) if previous == Some(item.domain) => range.end = position + 1,
                Some(_) => {
                    return Err(CatalogError::NonContiguousDomain {
                        domain: item.domain,
                        index: position,
                    })
                }
                None => {
                    if let Some(prev) = previous {
                        if prev > item.domain {
                            return Err(CatalogError::DomainOutOfOrder {
                                domain: item.domain,
                                index: position,
                            });
                        }
                    }
                    *slot = Some(position..position + 1);
                }
            }
            previous = Some(item.domain);
        }

        let mut resolved: [Range<usize>; 4] = Default::default();
        for domain in Domain::ordered() {
            resolved[domain.slot()] = ranges[domain.slot()]
                .clone()
                .ok_or(CatalogError::EmptyDomain { domain })?;
        }

        Ok(Self {
            items,
            ranges: resolved,
        })
    }

    /// Replaces the reversal flags, e.g. when a questionnaire variant scores items differently.
    pub fn with_reversal_table(mut self, table: &[bool]) -> Result<Self, CatalogError> {
        if table.len() != self.items.len() {
            return Err(CatalogError::ReversalTableLength {
                expected: self.items.len(),
                actual: table.len(),
            });
        }
        for (item, reversed) in self.items.iter_mut().zip(table) {
            item.reversed = *reversed;
        }
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn domain_range(&self, domain: Domain) -> Range<usize> {
        self.ranges[domain.slot()].clone()
    }

    pub fn items_in(&self, domain: Domain) -> &[Item] {
        &self.items[self.domain_range(domain)]
    }

    pub fn reversal_table(&self) -> Vec<bool> {
        self.items.iter().map(|item| item.reversed).collect()
    }
}

fn standard_items() -> Vec<Item> {
    use Domain::{Reaction, Satisfaction, Support, Workload};

    // (domain, reversed, prompt). Positively worded Workload items are reversed so a
    // high Workload score always means more burden. Reaction, Support and
    // Satisfaction are scored as answered.
    let specs: [(Domain, bool, &'static str); STANDARD_ITEM_COUNT] = [
        (Workload, true, "I can work at my own pace."),
        (Workload, false, "I have a lot of work to do."),
        (Workload, false, "It is hard to finish my work in the time available."),
        (Workload, false, "My work is highly demanding."),
        (Workload, true, "My work makes use of my knowledge and skills."),
        (Workload, true, "I have discretion over how I do my work."),
        (Workload, true, "My role at work is clearly defined."),
        (Workload, true, "I feel my work matters within the organization."),
        (Workload, true, "I feel the results of my work are rewarded."),
        (Workload, true, "The atmosphere at my workplace is good."),
        (Workload, false, "I have to be careful about relationships at work."),
        (Workload, true, "I get support from my supervisor."),
        (Workload, true, "I get support from my co-workers."),
        (Workload, true, "I have someone to talk to about work matters."),
        (Workload, true, "My relationships with clients and partners go well."),
        (Workload, true, "My opinions are respected at work."),
        (Workload, true, "I feel I have a place at my workplace."),
        (Reaction, false, "I feel lively."),
        (Reaction, false, "I can concentrate on my work."),
        (Reaction, false, "I feel gloomy."),
        (Reaction, false, "I feel depressed."),
        (Reaction, false, "I get angry easily."),
        (Reaction, false, "I feel irritated."),
        (Reaction, false, "I feel restless."),
        (Reaction, false, "I feel anxious."),
        (Reaction, false, "I cannot sleep well."),
        (Reaction, false, "I tire easily."),
        (Reaction, false, "My body feels heavy."),
        (Reaction, false, "My head feels heavy."),
        (Reaction, false, "I have stiff shoulders or back pain."),
        (Reaction, false, "I have stomach pain or a poor appetite."),
        (Reaction, false, "I have palpitations or shortness of breath."),
        (Reaction, false, "My hands or feet feel cold or numb."),
        (Reaction, false, "I feel dizzy or unsteady."),
        (Reaction, false, "I feel physically unwell."),
        (Reaction, false, "I cannot find the energy to work."),
        (Reaction, false, "I cannot keep my concentration."),
        (Reaction, false, "I cannot enjoy things."),
        (Reaction, false, "I often blame myself."),
        (Reaction, false, "I am not interested in the people around me."),
        (Reaction, false, "I feel worthless."),
        (Reaction, false, "I have no hope for the future."),
        (Reaction, false, "I am still tired after sleeping."),
        (Reaction, false, "Small things bother me."),
        (Reaction, false, "I am easily moved to tears."),
        (Reaction, false, "I am still tired on my days off."),
        (Support, false, "My supervisor listens to my opinions."),
        (Support, false, "My supervisor gives me advice when I need it."),
        (Support, false, "My supervisor treats me fairly."),
        (Support, false, "My co-workers help me when I am in trouble."),
        (Support, false, "I can talk casually with my co-workers."),
        (Support, false, "I can work together with my co-workers."),
        (Support, false, "My family and friends support me."),
        (Support, false, "I can talk to my family and friends about my worries."),
        (Support, false, "My family and friends understand my work."),
        (Satisfaction, false, "I am satisfied with my current job."),
        (Satisfaction, false, "I am satisfied with my current life."),
    ];

    specs
        .into_iter()
        .enumerate()
        .map(|(index, (domain, reversed, prompt))| Item {
            index,
            domain,
            reversed,
            prompt,
        })
        .collect()
}
