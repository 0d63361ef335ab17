//! Category loading into the form's selector.

use reqwest::Method;

use super::{ApiRequest, SyncError, Transport};
use crate::domain::Category;
use crate::form::FormStateController;

/// Collection endpoint for categories.
pub const CATEGORIES_PATH: &str = "/api/categories/";

/// Populates the category selector from the server.
pub struct CategoryLoader;

impl CategoryLoader {
    /// Fetches all categories in server order.
    pub async fn fetch<T: Transport + ?Sized>(transport: &T) -> Result<Vec<Category>, SyncError> {
        let request = ApiRequest::new(Method::GET, CATEGORIES_PATH);
        let body = transport.send(request).await?.into_success()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Appends one option per category to the controller's selector.
    ///
    /// Failures are logged and leave the selector as it was, so the form stays
    /// usable for notes without categories. Returns the number of options added.
    pub async fn load<T: Transport + ?Sized>(
        transport: &T,
        controller: &mut FormStateController,
    ) -> usize {
        match Self::fetch(transport).await {
            Ok(categories) => {
                log::debug!("loaded {} categories", categories.len());
                controller.render_categories(&categories);
                categories.len()
            }
            Err(e) => {
                log::error!("failed to load categories: {}", e);
                0
            }
        }
    }
}
