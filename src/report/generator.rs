use chrono::{DateTime, Utc};
use std::io::Write;

use crate::bugzilla::BugzillaService;
use crate::error::{Error, Result};
use crate::gerrit::ReviewService;
use crate::launchpad::LaunchpadService;
use crate::models::{Card, CardSummary, CountSummary, ReviewIdentities};
use crate::report::format::{cutoff, day, rule, truncate, BUG_TITLE_WIDTH, CARD_TITLE_WIDTH};
use crate::trello::BoardService;

/// List on the checked board whose cards count as "in progress".
pub const IN_PROGRESS_LIST: &str = "In Progress";

/// The service handles a report reads from. The board service is optional
/// because it needs credentials.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    pub boards: Option<&'a dyn BoardService>,
    pub reviews: &'a dyn ReviewService,
    pub launchpad: &'a dyn LaunchpadService,
    pub bugzilla: &'a dyn BugzillaService,
}

/// Prints per-person status tables to `out`.
///
/// Every operation queries one service, prints what it found and returns
/// the counts it printed, so a caller can build a team summary from them.
pub struct Report<'a, W: Write> {
    services: Services<'a>,
    board_to_check_id: String,
    now: DateTime<Utc>,
    out: W,
}

impl<'a, W: Write> Report<'a, W> {
    pub fn new(services: Services<'a>, board_to_check_id: impl Into<String>, out: W) -> Self {
        Self::with_now(services, board_to_check_id, out, Utc::now())
    }

    pub fn with_now(
        services: Services<'a>,
        board_to_check_id: impl Into<String>,
        out: W,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            services,
            board_to_check_id: board_to_check_id.into(),
            now,
            out,
        }
    }

    pub fn has_boards(&self) -> bool {
        self.services.boards.is_some()
    }

    pub fn cutoff(&self, start_date: i64) -> Result<DateTime<Utc>> {
        cutoff(self.now, start_date)
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn boards(&self) -> Result<&'a dyn BoardService> {
        self.services.boards.ok_or_else(|| {
            Error::Config("board reports need TRELLO_API_KEY and trello_token".to_string())
        })
    }

    /// Prints `header`, then one row per card: board, short URL, list, title.
    pub async fn print_cards(&mut self, cards: &[Card], header: &str) -> Result<()> {
        writeln!(self.out, "{}", header)?;

        for card in cards {
            let boards = self.boards()?;
            let list_name = boards
                .get_single_list_by_id(&card.id_board, &card.id_list)
                .await?;
            let board_name = boards.get_name(&card.id_board).await?;
            writeln!(
                self.out,
                "\t {:>30}: {:>20} {:>20} {}",
                board_name,
                card.short_url,
                list_name,
                truncate(&card.name, CARD_TITLE_WIDTH)
            )?;
        }

        Ok(())
    }

    pub async fn get_member_cards(&self, member: &str) -> Result<Vec<Card>> {
        self.boards()?.get_member_cards(member).await
    }

    /// Cards of `member` touched after the cutoff, plus the number of cards
    /// on the checked board's "In Progress" list that include the member.
    pub async fn print_active_cards(&mut self, member: &str, start_date: i64) -> Result<CardSummary> {
        let boards = self.boards()?;
        let since = self.cutoff(start_date)?;

        let active_cards: Vec<Card> = self
            .get_member_cards(member)
            .await?
            .into_iter()
            .filter(|c| c.date_last_activity > since)
            .collect();

        let member_name = boards.get_member_name(member).await?;
        let member_id = boards.get_member(member).await?.id;
        let in_progress_list = boards
            .get_single_list_by_name(&self.board_to_check_id, IN_PROGRESS_LIST)
            .await?;
        let in_progress = boards
            .get_cards(&in_progress_list)
            .await?
            .iter()
            .filter(|c| c.has_member(&member_id))
            .count();

        tracing::debug!(
            "{}: {} active cards, {} in progress",
            member,
            active_cards.len(),
            in_progress
        );

        let header = format!(
            "\t {} {} 's Active cards since {} {} Number of Cards:  {} {} In Progress: {} {}",
            rule(13),
            member_name,
            day(&since),
            rule(18),
            active_cards.len(),
            rule(8),
            in_progress,
            rule(20)
        );
        self.print_cards(&active_cards, &header).await?;

        Ok(CardSummary {
            member_name,
            active: active_cards.len(),
            in_progress,
        })
    }

    /// Open or merged changes of any of `identities` since the cutoff.
    pub async fn print_reviews(
        &mut self,
        identities: &ReviewIdentities,
        start_date: i64,
    ) -> Result<CountSummary> {
        let since = self.cutoff(start_date)?;
        let changes = self
            .services
            .reviews
            .get_open_changes_by_person(identities, since)
            .await?;

        writeln!(
            self.out,
            "\t {:>50} {:<70} {:>8} {:>10} {:<10} {:<10}",
            "project", "subject", "id", "status", "created", "updated"
        )?;
        writeln!(
            self.out,
            "{} Since {} Total Open or Merged Gerrit Reviews: {}  {}",
            rule(5),
            day(&since),
            changes.len(),
            rule(105)
        )?;

        for change in &changes {
            writeln!(
                self.out,
                "\t {:>50} {:<70} {:>8} {:>10} {:<10} {:<10}",
                change.project,
                change.subject,
                change.number,
                change.status,
                day(&change.created),
                day(&change.updated)
            )?;
        }

        Ok(CountSummary {
            identity: identities.primary().unwrap_or_default().to_string(),
            count: changes.len(),
        })
    }

    pub async fn print_launch_pad_bugs(&mut self, person: &str, start_date: i64) -> Result<CountSummary> {
        let since = self.cutoff(start_date)?;
        let bugs = self
            .services
            .launchpad
            .get_bugs_by_person(person, since)
            .await?;

        if bugs.is_empty() {
            writeln!(self.out, "No recently opened LaunchPad bugs found")?;
        } else {
            writeln!(
                self.out,
                "\t{} Launchpad bugs reported by:  {} === Total Bugs:  {} {}",
                rule(20),
                person,
                bugs.len(),
                rule(20)
            )?;
            writeln!(self.out, "\n")?;
            writeln!(
                self.out,
                "\t {:>10} {:>10} {:>30} {:>20}",
                "Reported By:", "Date Updated:", "Link:", "Title:"
            )?;
            for bug in &bugs {
                writeln!(
                    self.out,
                    "\t {:>10} {:>10} {:>15} {}",
                    bug.author,
                    day(&bug.updated),
                    bug.link,
                    truncate(&bug.title, BUG_TITLE_WIDTH)
                )?;
            }
        }

        Ok(CountSummary {
            identity: person.to_string(),
            count: bugs.len(),
        })
    }

    pub async fn print_bugzilla_bugs(&mut self, person: &str, start_date: i64) -> Result<CountSummary> {
        let since = self.cutoff(start_date)?;
        let bugs = self.services.bugzilla.get_rhos_bugs(person, since).await?;

        if bugs.is_empty() {
            writeln!(self.out, "No recently opened Bugzilla bugs found")?;
        } else {
            writeln!(
                self.out,
                "\t{} Bugzilla bugs reported by:  {} === Total Bugs:  {} {}",
                rule(20),
                person,
                bugs.len(),
                rule(20)
            )?;
            writeln!(self.out, "\n")?;
            writeln!(
                self.out,
                "\t {:<11} {:<20} {:<20} {:<13} {:<45} {}",
                "Status:", "Reporter", "Assigned to:", "Date Updated:", "Link:", "Title:"
            )?;
            for bug in &bugs {
                writeln!(
                    self.out,
                    "\t {:<11} {:<20} {:<20} {:<13} {:<45} {}",
                    bug.status,
                    bug.creator,
                    bug.assigned_to,
                    day(&bug.last_change_time),
                    bug.url,
                    bug.summary
                )?;
            }
        }

        Ok(CountSummary {
            identity: person.to_string(),
            count: bugs.len(),
        })
    }
}
