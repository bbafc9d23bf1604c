use crate::shared::errors::AppError;

/// Render state of a list view.
#[derive(Debug, Clone, PartialEq)]
pub enum ListViewState {
    Loading,
    Loaded,
    /// Nothing fetched, or nothing left after filtering.
    Empty,
    Error(AppError),
}

/// `fetched` is the size of the fetched list, `visible` the size after filtering.
pub fn list_view_state(
    is_loading: bool,
    error: Option<&AppError>,
    fetched: usize,
    visible: usize,
) -> ListViewState {
    if is_loading {
        ListViewState::Loading
    } else if let Some(e) = error {
        ListViewState::Error(e.clone())
    } else if fetched == 0 || visible == 0 {
        ListViewState::Empty
    } else {
        ListViewState::Loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::ApiError;

    #[test]
    fn test_loading_wins() {
        assert_eq!(list_view_state(true, None, 0, 0), ListViewState::Loading);
    }

    #[test]
    fn test_error_is_terminal() {
        let err = AppError::Fetch(ApiError::Network("offline".into()));
        assert_eq!(
            list_view_state(false, Some(&err), 0, 0),
            ListViewState::Error(err.clone())
        );
    }

    #[test]
    fn test_empty_vs_loaded() {
        assert_eq!(list_view_state(false, None, 0, 0), ListViewState::Empty);
        assert_eq!(list_view_state(false, None, 5, 0), ListViewState::Empty);
        assert_eq!(list_view_state(false, None, 5, 2), ListViewState::Loaded);
    }
}
