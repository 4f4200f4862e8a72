use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusCount {
    pub label: String,
    pub count: u64,
}

/// Record counts per display label, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct StatusBreakdown(Vec<StatusCount>);

impl StatusBreakdown {
    pub fn record(&mut self, label: &str) {
        match self.0.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.count = entry.count.saturating_add(1),
            None => self.0.push(StatusCount {
                label: label.to_string(),
                count: 1,
            }),
        }
    }

    pub fn count(&self, label: &str) -> u64 {
        self.0
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    pub fn entries(&self) -> &[StatusCount] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StatusBreakdown {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut breakdown = StatusBreakdown::default();
        for label in iter {
            breakdown.record(label);
        }
        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::StatusBreakdown;

    #[test]
    fn keeps_first_seen_order() {
        let breakdown: StatusBreakdown = ["Em Execução", "Aprovada", "Em Execução", "zzz"]
            .into_iter()
            .collect();
        let labels: Vec<_> = breakdown.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Em Execução", "Aprovada", "zzz"]);
        assert_eq!(breakdown.count("Em Execução"), 2);
        assert_eq!(breakdown.count("Concluída"), 0);
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let breakdown: StatusBreakdown = ["Aprovada"].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&breakdown).expect("json"),
            serde_json::json!([{ "label": "Aprovada", "count": 1 }])
        );
    }
}
