//! Render fetched repository names for the console.

/// Header line printed above the repository names.
pub const LIST_HEADER: &str = "Azure Repositories:";

/// Format the header followed by one line per repository name, in input order.
///
/// An empty input renders the header alone.
pub fn render_repository_list(names: &[String]) -> String {
    let mut out = String::from(LIST_HEADER);
    for name in names {
        out.push('\n');
        out.push_str(name);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_then_names_in_order() {
        let names = vec!["repoA".to_string(), "repoB".to_string()];
        assert_eq!(
            render_repository_list(&names),
            "Azure Repositories:\nrepoA\nrepoB"
        );
    }

    #[test]
    fn renders_header_alone_for_empty_list() {
        assert_eq!(render_repository_list(&[]), "Azure Repositories:");
    }

    #[test]
    fn does_not_reorder_names() {
        let names = vec!["zeta".to_string(), "alpha".to_string()];
        assert_eq!(
            render_repository_list(&names),
            "Azure Repositories:\nzeta\nalpha"
        );
    }
}
