//! Rendering helpers - the only module that prints.
//!
//! This is an operator-facing console, so `println!` is intentionally used
//! for user-facing output rather than structured logging. Handlers compose
//! their data and hand it over; everything here is formatting.

#![allow(clippy::print_stdout)]

use std::time::Duration;

use chrono::NaiveDateTime;

use calldeck_common::{format_duration, format_seconds};
use calldeck_core::{CampaignSubmission, SubmissionOutcome};
use calldeck_domain::{
    Agent, AnalysisAvailability, AnalysisProgress, CallStatusSnapshot, Campaign, CampaignContact,
    CampaignStats, CampaignStatus, Config, Contact, InvalidContact, RecentCallsPage,
    SavedPhoneNumber,
};
use calldeck_infra::CampaignSnapshot;

/// Placeholder for absent optional values
fn dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn duration_cell(seconds: Option<i64>) -> String {
    seconds
        .and_then(|secs| u64::try_from(secs).ok())
        .map(format_seconds)
        .unwrap_or_else(|| "-".to_string())
}

fn date_cell(timestamp: Option<NaiveDateTime>) -> String {
    timestamp.map(|ts| ts.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_else(|| "-".to_string())
}

/// Effective configuration plus the probe verdict
pub fn doctor_report(config: &Config, online: bool) {
    println!("backend   {}", config.api.base_url);
    println!("probe     {}", config.api.status_url());
    println!("timeout   {}", format_duration(config.api.timeout()));
    println!(
        "dialing   +{} with {}-digit national numbers",
        config.dialing.country_code, config.dialing.national_len
    );
    println!(
        "polling   campaign {}s, live call {}s",
        config.monitor.poll_interval_secs, config.monitor.live_poll_interval_secs
    );
    println!(
        "analysis  batches of {}, up to {} extra rounds",
        config.monitor.analysis_batch_size, config.monitor.analysis_max_retries
    );
    println!("status    {}", if online { "online" } else { "offline" });
}

pub fn agents(agents: &[Agent]) {
    if agents.is_empty() {
        println!("no agents configured");
        return;
    }

    println!("{:<24} {:<24} {}", "AGENT ID", "NAME", "FROM");
    for agent in agents {
        println!(
            "{:<24} {:<24} {}",
            agent.agent_id,
            agent.name,
            dash(agent.from_number.as_deref())
        );
    }
}

pub fn numbers(numbers: &[SavedPhoneNumber]) {
    if numbers.is_empty() {
        println!("no saved numbers");
        return;
    }

    println!("{:<6} {:<18} {:<10} {}", "ID", "NUMBER", "KIND", "LABEL");
    for number in numbers {
        println!(
            "{:<6} {:<18} {:<10} {}",
            number.id,
            number.phone_number,
            number.number_type,
            dash(number.label.as_deref())
        );
    }
}

pub fn calls_page(page: &RecentCallsPage) {
    let meta = &page.meta;
    println!("{} of {} calls (offset {})", page.calls.len(), meta.total_count, meta.offset);
    if page.calls.is_empty() {
        return;
    }

    println!(
        "{:<38} {:<16} {:<16} {:<12} {:<10} {}",
        "CALL UUID", "FROM", "TO", "STATE", "DURATION", "STARTED"
    );
    for call in &page.calls {
        println!(
            "{:<38} {:<16} {:<16} {:<12} {:<10} {}",
            call.call_uuid,
            dash(call.from_number.as_deref()),
            dash(call.to_number.as_deref()),
            dash(call.call_state.as_deref()),
            duration_cell(call.call_duration),
            dash(call.initiation_time.as_deref())
        );
    }
}

pub fn call_status(snapshot: &CallStatusSnapshot) {
    match snapshot {
        CallStatusSnapshot::Live(details) => {
            println!("status    live");
            if let Some(state) = details.call_status {
                println!("state     {state}");
            }
            println!("from      {}", dash(details.from_number.as_deref()));
            println!("to        {}", dash(details.to_number.as_deref()));
            if let Some(name) = details.caller_name.as_deref() {
                println!("caller    {name}");
            }
            println!("started   {}", dash(details.session_start.as_deref()));
        }
        CallStatusSnapshot::Completed(details) => {
            println!("status    completed");
            println!("from      {}", dash(details.from_number.as_deref()));
            println!("to        {}", dash(details.to_number.as_deref()));
            println!("duration  {}", duration_cell(details.call_duration));
            println!("hangup    {}", dash(details.hangup_cause_name.as_deref()));
            println!("ended     {}", dash(details.end_time.as_deref()));
        }
    }
}

pub fn campaigns(campaigns: &[Campaign]) {
    if campaigns.is_empty() {
        println!("no campaigns");
        return;
    }

    println!("{:<6} {:<28} {:<10} {:>8}  {}", "ID", "NAME", "STATUS", "CONTACTS", "SCHEDULED");
    for campaign in campaigns {
        println!(
            "{:<6} {:<28} {:<10} {:>8}  {}",
            campaign.campaign_id,
            campaign.campaign_name,
            campaign.status,
            campaign.total_contacts,
            date_cell(campaign.schedule_date)
        );
    }
}

pub fn campaign_details(campaign: &Campaign) {
    println!("id         {}", campaign.campaign_id);
    println!("name       {}", campaign.campaign_name);
    println!("status     {}", campaign.status);
    println!("agent      {}", campaign.assigned_agent_id);
    if let Some(name) = campaign.assigned_agent_name.as_deref() {
        println!("agent name {name}");
    }
    println!("from       {}", campaign.from_number);
    println!("contacts   {}", campaign.total_contacts);
    println!("scheduled  {}", date_cell(campaign.schedule_date));
    println!("file       {}", dash(campaign.file_name.as_deref()));
    println!("created    {}", date_cell(campaign.created_at));
}

pub fn campaign_stats(stats: &CampaignStats) {
    println!("contacts    {}", stats.total_contacts);
    println!("completed   {}", stats.completed_contacts);
    println!("failed      {}", stats.failed_contacts);
    println!("no answer   {}", stats.no_answer_contacts);
    println!("pending     {}", stats.pending_contacts);
    println!("calling     {}", stats.calling_contacts);
    println!("completion  {:.1}%", stats.completion_rate);
    println!("success     {:.1}%", stats.success_rate);
    println!("calls made  {}", stats.total_calls);
    println!("avg length  {}", format_seconds(stats.average_call_duration.round().max(0.0) as u64));
}

pub fn campaign_contacts(contacts: &[CampaignContact]) {
    if contacts.is_empty() {
        println!("no contacts");
        return;
    }

    println!("{:<6} {:<20} {:<16} {:<10} {}", "ID", "NAME", "PHONE", "STATUS", "CALL UUID");
    for contact in contacts {
        println!(
            "{:<6} {:<20} {:<16} {:<10} {}",
            contact.id,
            dash(contact.name.as_deref()),
            contact.phone,
            contact.status,
            dash(contact.call_uuid.as_deref())
        );
    }
}

pub fn status_changed(id: i64, status: CampaignStatus) {
    println!("campaign {id} is now {status}");
}

pub fn campaign_deleted(id: i64) {
    println!("campaign {id} deleted");
}

/// Classification outcome of the loaded contact file, rejected rows first
pub fn classification(valid: &[Contact], invalid: &[InvalidContact]) {
    let repaired = valid.iter().filter(|contact| contact.was_fixed).count();
    println!("{} valid contacts ({repaired} repaired), {} rejected", valid.len(), invalid.len());
    for contact in invalid {
        println!("  row {:>4}  {:<18} {}", contact.id + 1, contact.phone, contact.reason);
    }
}

/// The review snapshot exactly as it will be submitted
pub fn review(submission: &CampaignSubmission) {
    let campaign = &submission.campaign;
    match submission.campaign_id {
        Some(id) => println!("review: update campaign {id}"),
        None => println!("review: new campaign"),
    }
    println!("  name      {}", campaign.campaign_name);
    println!("  agent     {}", campaign.assigned_agent_id);
    println!("  from      {}", campaign.from_number);
    println!("  contacts  {}", campaign.total_contacts);
    println!("  file      {}", dash(campaign.file_name.as_deref()));
    match campaign.schedule_date {
        Some(at) => {
            println!("  starts    {} (status {})", at.format("%Y-%m-%d %H:%M"), campaign.status);
        }
        None => println!("  starts    immediately (status {})", campaign.status),
    }
}

pub fn dry_run_notice() {
    println!("dry run, nothing submitted");
}

pub fn submitted(outcome: &SubmissionOutcome) {
    println!(
        "campaign {} \"{}\" saved with {} contacts",
        outcome.campaign.campaign_id, outcome.campaign.campaign_name, outcome.contacts_added
    );
}

pub fn watch_header(subject: &str, interval: Duration) {
    println!("watching {subject} every {} (ctrl-c to stop)", format_duration(interval));
}

/// Print the frame when it differs from the previous one, timestamped.
///
/// The clock prefix stays out of the comparison so an unchanged frame does
/// not reprint every tick.
pub fn frame_if_changed(previous: &mut String, frame: String) {
    if frame != *previous {
        println!("{}  {frame}", chrono::Local::now().format("%H:%M:%S"));
        *previous = frame;
    }
}

/// One status line for a watched call
pub fn call_frame(latest: Option<&CallStatusSnapshot>, last_error: Option<&str>) -> String {
    match latest {
        Some(CallStatusSnapshot::Live(details)) => {
            let state =
                details.call_status.map_or_else(|| "live".to_string(), |state| state.to_string());
            format!("{state}  to {}", dash(details.to_number.as_deref()))
        }
        Some(CallStatusSnapshot::Completed(details)) => {
            format!("completed  {}", duration_cell(details.call_duration))
        }
        None => match last_error {
            Some(error) => format!("no status yet ({error})"),
            None => "no status yet".to_string(),
        },
    }
}

/// One status line for a watched campaign
pub fn campaign_frame(snapshot: &CampaignSnapshot) -> String {
    if !snapshot.loaded {
        return match snapshot.last_error.as_deref() {
            Some(error) => format!("waiting for first load ({error})"),
            None => "waiting for first load".to_string(),
        };
    }

    let status = snapshot
        .campaign
        .as_ref()
        .map_or_else(|| "unknown".to_string(), |campaign| campaign.status.to_string());
    let mut frame = match snapshot.stats.as_ref() {
        Some(stats) => format!(
            "{status}  done {}/{} failed {} no-answer {} calling {}",
            stats.completed_contacts,
            stats.total_contacts,
            stats.failed_contacts,
            stats.no_answer_contacts,
            stats.calling_contacts
        ),
        None => status,
    };

    // Sorted so the frame is stable across map iteration orders
    let mut live: Vec<String> = snapshot
        .live_calls
        .values()
        .map(|details| {
            let state =
                details.call_status.map_or_else(|| "live".to_string(), |state| state.to_string());
            format!("{} {state}", dash(details.to_number.as_deref()))
        })
        .collect();
    live.sort();
    if !live.is_empty() {
        frame.push_str("  live: ");
        frame.push_str(&live.join(", "));
    }

    if let Some(error) = snapshot.last_error.as_deref() {
        frame.push_str("  last error: ");
        frame.push_str(error);
    }
    frame
}

pub fn campaign_finished(snapshot: &CampaignSnapshot) {
    println!("campaign completed");
    if let Some(stats) = snapshot.stats.as_ref() {
        campaign_stats(stats);
    }
}

pub fn watch_ended_without_data(last_error: Option<&str>) {
    match last_error {
        Some(error) => println!("watch ended without a status ({error})"),
        None => println!("watch ended without a status"),
    }
}

/// One progress line for the analysis availability sweep
pub fn analysis_frame(progress: AnalysisProgress) -> String {
    format!(
        "analysis {}/{} available ({}%)",
        progress.available,
        progress.total,
        progress.percent()
    )
}

/// Per-call availability after the sweep, eligible calls only
pub fn analysis_summary(rows: &[(&CampaignContact, Option<AnalysisAvailability>)]) {
    if rows.is_empty() {
        println!("no completed calls to analyze");
        return;
    }

    println!(
        "{:<20} {:<38} {:<12} {:<12} {}",
        "NAME", "CALL UUID", "TRANSCRIPT", "RECORDING", "SUMMARY"
    );
    for (contact, availability) in rows {
        let name = dash(contact.name.as_deref());
        let uuid = dash(contact.call_uuid.as_deref());
        match availability {
            Some(availability) => match availability.gap {
                Some(gap) => println!("{name:<20} {uuid:<38} gap: {gap}"),
                None => println!(
                    "{name:<20} {uuid:<38} {:<12} {:<12} {}",
                    ready_cell(availability.transcript),
                    ready_cell(availability.recording),
                    ready_cell(availability.summary)
                ),
            },
            None => println!("{name:<20} {uuid:<38} not checked"),
        }
    }
}

fn ready_cell(ready: bool) -> &'static str {
    if ready {
        "ready"
    } else {
        "-"
    }
}
