///
/// Errors from requests to move the view (for example, zooming to the extent of a geometry)
///
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NavigationError {
    /// The navigation was interrupted by another one (this is expected when the user moves the map)
    #[error("Navigation was aborted")]
    Aborted,

    #[error("Navigation failed: {0}")]
    Failed(String),
}

///
/// Reports the result of a navigation request
///
/// Aborted navigations are ignored, as they only mean that another navigation replaced this one. Other
/// failures are logged and returned.
///
pub fn report_navigation_result(result: Result<(), NavigationError>) -> Result<(), NavigationError> {
    match result {
        Ok(())                          => Ok(()),
        Err(NavigationError::Aborted)   => Ok(()),
        Err(err)                        => {
            log::error!("{}", err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aborted_navigation_is_not_an_error() {
        assert!(report_navigation_result(Err(NavigationError::Aborted)) == Ok(()));
    }

    #[test]
    fn other_failures_are_returned() {
        let result = report_navigation_result(Err(NavigationError::Failed("no extent".to_string())));

        assert!(result == Err(NavigationError::Failed("no extent".to_string())), "{:?}", result);
    }

    #[test]
    fn success_is_success() {
        assert!(report_navigation_result(Ok(())) == Ok(()));
    }
}
