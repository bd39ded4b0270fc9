use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Card, Member};

/// Read-only access to boards, lists, cards and members of the task board.
#[async_trait]
pub trait BoardService: Send + Sync {
    async fn get_member(&self, member: &str) -> Result<Member>;

    /// Display name of `member`.
    async fn get_member_name(&self, member: &str) -> Result<String> {
        Ok(self.get_member(member).await?.full_name)
    }

    /// Cards assigned to `member` across every board.
    async fn get_member_cards(&self, member: &str) -> Result<Vec<Card>>;

    /// Board name.
    async fn get_name(&self, board_id: &str) -> Result<String>;

    /// Name of the list `list_id` on `board_id`.
    async fn get_single_list_by_id(&self, board_id: &str, list_id: &str) -> Result<String>;

    /// Id of the list called `name` on `board_id`.
    async fn get_single_list_by_name(&self, board_id: &str, name: &str) -> Result<String>;

    async fn get_cards(&self, list_id: &str) -> Result<Vec<Card>>;
}
