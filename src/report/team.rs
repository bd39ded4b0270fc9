use std::io::Write;

use crate::error::Result;
use crate::models::{MemberRollup, TeamMember};
use crate::report::format::{count_cell, day, rule};
use crate::report::generator::Report;

/// Runs every section of the report for each roster member and prints a
/// roll-up table of the returned counts.
pub struct TeamReport<'a, W: Write> {
    report: Report<'a, W>,
}

impl<'a, W: Write> TeamReport<'a, W> {
    pub fn new(report: Report<'a, W>) -> Self {
        Self { report }
    }

    pub fn into_inner(self) -> Report<'a, W> {
        self.report
    }

    /// Sections whose identity is missing from the roster entry are skipped.
    pub async fn run_member(&mut self, member: &TeamMember, start_date: i64) -> Result<MemberRollup> {
        let mut rollup = MemberRollup::new(&member.key);
        let ids = &member.identities;
        tracing::info!("Reporting on {}", member.key);

        match &ids.trello {
            Some(trello) if self.report.has_boards() => {
                rollup.cards = Some(self.report.print_active_cards(trello, start_date).await?);
            }
            Some(_) => tracing::debug!("Board service disabled, skipping cards for {}", member.key),
            None => tracing::debug!("No trello account for {}", member.key),
        }

        let review_ids = member.review_identities();
        if review_ids.is_empty() {
            tracing::debug!("No gerrit accounts for {}", member.key);
        } else {
            rollup.reviews = Some(self.report.print_reviews(&review_ids, start_date).await?);
        }

        if let Some(person) = &ids.launchpad {
            rollup.launchpad = Some(self.report.print_launch_pad_bugs(person, start_date).await?);
        } else {
            tracing::debug!("No launchpad account for {}", member.key);
        }

        if let Some(person) = &ids.bugzilla {
            rollup.bugzilla = Some(self.report.print_bugzilla_bugs(person, start_date).await?);
        } else {
            tracing::debug!("No bugzilla account for {}", member.key);
        }

        writeln!(self.report.writer())?;
        Ok(rollup)
    }

    /// Members are processed one after another, in roster order.
    pub async fn run_team(&mut self, members: &[TeamMember], start_date: i64) -> Result<Vec<MemberRollup>> {
        let mut rollups = Vec::with_capacity(members.len());
        for member in members {
            rollups.push(self.run_member(member, start_date).await?);
        }

        self.print_summary(&rollups, start_date)?;
        Ok(rollups)
    }

    pub fn print_summary(&mut self, rollups: &[MemberRollup], start_date: i64) -> Result<()> {
        let since = day(&self.report.cutoff(start_date)?);
        let out = self.report.writer();

        writeln!(out, "\t{} Team summary since {} {}", rule(20), since, rule(20))?;
        writeln!(
            out,
            "\t {:<30} {:>8} {:>12} {:>8} {:>10} {:>9}",
            "Member", "Active", "In Progress", "Reviews", "Launchpad", "Bugzilla"
        )?;

        let mut totals = [0usize; 5];
        for rollup in rollups {
            let counts = [
                rollup.cards.as_ref().map(|c| c.active),
                rollup.cards.as_ref().map(|c| c.in_progress),
                rollup.reviews.as_ref().map(|r| r.count),
                rollup.launchpad.as_ref().map(|l| l.count),
                rollup.bugzilla.as_ref().map(|b| b.count),
            ];
            for (total, count) in totals.iter_mut().zip(counts) {
                *total += count.unwrap_or(0);
            }

            writeln!(
                out,
                "\t {:<30} {:>8} {:>12} {:>8} {:>10} {:>9}",
                rollup.display_name(),
                count_cell(counts[0]),
                count_cell(counts[1]),
                count_cell(counts[2]),
                count_cell(counts[3]),
                count_cell(counts[4])
            )?;
        }

        writeln!(
            out,
            "\t {:<30} {:>8} {:>12} {:>8} {:>10} {:>9}",
            "Total", totals[0], totals[1], totals[2], totals[3], totals[4]
        )?;

        Ok(())
    }
}
