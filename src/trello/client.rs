use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;

use crate::config::TrelloCredentials;
use crate::error::{Error, Result};
use crate::models::{Board, BoardList, Card, Member};
use crate::trello::service::BoardService;

const CARD_FIELDS: &str = "id,name,idBoard,shortUrl,idList,idMembers,dateLastActivity";

pub struct TrelloClient {
    client: Client,
    base_url: String,
    api_key: String,
    token: String,
}

impl TrelloClient {
    pub fn new(credentials: &TrelloCredentials) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("statusreport/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: "https://api.trello.com/1".to_string(),
            api_key: credentials.api_key.clone(),
            token: credentials.token.clone(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get<T: DeserializeOwned>(&self, path: &str, fields: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Fetching: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("token", self.token.as_str()),
                ("fields", fields),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TrelloApi(format!(
                "GET {} failed: {} - {}",
                path, status, body
            )));
        }

        Ok(response.json().await?)
    }

    async fn get_lists(&self, board_id: &str) -> Result<Vec<BoardList>> {
        self.get(&format!("boards/{}/lists", board_id), "id,name")
            .await
    }
}

#[async_trait]
impl BoardService for TrelloClient {
    async fn get_member(&self, member: &str) -> Result<Member> {
        self.get(&format!("members/{}", member), "id,username,fullName")
            .await
    }

    async fn get_member_cards(&self, member: &str) -> Result<Vec<Card>> {
        tracing::info!("Fetching Trello cards for: {}", member);
        self.get(&format!("members/{}/cards", member), CARD_FIELDS)
            .await
    }

    async fn get_name(&self, board_id: &str) -> Result<String> {
        let board: Board = self.get(&format!("boards/{}", board_id), "id,name").await?;
        Ok(board.name)
    }

    async fn get_single_list_by_id(&self, board_id: &str, list_id: &str) -> Result<String> {
        self.get_lists(board_id)
            .await?
            .into_iter()
            .find(|l| l.id == list_id)
            .map(|l| l.name)
            .ok_or_else(|| Error::ListNotFound {
                board: board_id.to_string(),
                name: list_id.to_string(),
            })
    }

    async fn get_single_list_by_name(&self, board_id: &str, name: &str) -> Result<String> {
        self.get_lists(board_id)
            .await?
            .into_iter()
            .find(|l| l.name == name)
            .map(|l| l.id)
            .ok_or_else(|| Error::ListNotFound {
                board: board_id.to_string(),
                name: name.to_string(),
            })
    }

    async fn get_cards(&self, list_id: &str) -> Result<Vec<Card>> {
        tracing::info!("Fetching Trello cards in list: {}", list_id);
        self.get(&format!("lists/{}/cards", list_id), CARD_FIELDS)
            .await
    }
}
