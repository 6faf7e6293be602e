/*
 * Responsibility
 * - 各 submit フローで共有するコンテキスト (AppState)
 *   - ex: api: HttpPostApi, user: CurrentUser, navigator など
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use crate::api::{ApiResult, HttpPostApi};
use crate::config::Config;
use crate::forms::CurrentUser;
use crate::services::navigation::ConsoleNavigator;
use crate::services::submit::SubmitController;

#[derive(Clone, Debug)]
pub struct AppState {
    pub api: HttpPostApi,
    pub user: CurrentUser,
    pub navigator: ConsoleNavigator,
}

impl AppState {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let api = HttpPostApi::new(
            config.api_base_url.clone(),
            config.session_token.as_deref(),
        )?;

        Ok(Self {
            api,
            user: config.user.clone(),
            navigator: ConsoleNavigator::new(config.client_base_url.clone()),
        })
    }

    pub fn controller(&self) -> SubmitController<HttpPostApi, ConsoleNavigator> {
        SubmitController::new(
            self.api.clone(),
            self.navigator.clone(),
            self.user.clone(),
        )
    }
}
