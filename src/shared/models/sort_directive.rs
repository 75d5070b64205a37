use crate::task::Task;

/// Recognized values of the `sort` query parameter. Anything else falls back
/// to natural order (id ascending, which is insertion order).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirective {
    TitleAsc,
    TitleDesc,
}

impl SortDirective {
    pub fn parse(raw: &str) -> Option<SortDirective> {
        match raw {
            "asc" => Some(SortDirective::TitleAsc),
            "desc" => Some(SortDirective::TitleDesc),
            _ => None,
        }
    }

    pub fn apply(self, tasks: &mut [Task]) {
        match self {
            SortDirective::TitleAsc => tasks.sort_by(|a, b| a.title.cmp(&b.title)),
            SortDirective::TitleDesc => tasks.sort_by(|a, b| b.title.cmp(&a.title)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed_at: None,
        }
    }

    #[test]
    fn parse_recognized_values() {
        assert_eq!(SortDirective::parse("asc"), Some(SortDirective::TitleAsc));
        assert_eq!(SortDirective::parse("desc"), Some(SortDirective::TitleDesc));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(SortDirective::parse("sideways"), None);
        assert_eq!(SortDirective::parse(""), None);
        assert_eq!(SortDirective::parse("ASC"), None);
    }

    #[test]
    fn apply_orders_by_title() {
        let mut tasks = vec![task(1, "wash car"), task(2, "buy milk"), task(3, "pay rent")];

        SortDirective::TitleAsc.apply(&mut tasks);
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["buy milk", "pay rent", "wash car"]);

        SortDirective::TitleDesc.apply(&mut tasks);
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["wash car", "pay rent", "buy milk"]);
    }
}
