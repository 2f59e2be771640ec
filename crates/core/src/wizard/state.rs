//! Campaign wizard state machine
//!
//! Holds everything an in-flight campaign creation accumulates and gates
//! forward navigation on per-step validation. Backward navigation is always
//! allowed; forward movement goes one validated step at a time. The state
//! lives for one wizard run and is discarded on submit or cancel.

use std::fmt;

use calldeck_common::{
    combine_date_time, ScheduleError, ValidationError, ValidationResult, Validator,
};
use calldeck_domain::{
    Campaign, CampaignStatus, Contact, DialingConfig, InvalidContact, NewCampaign, NewContact,
    TableData,
};
use chrono::NaiveDateTime;

use crate::intake::classifier::ContactClassifier;
use crate::intake::columns::ColumnMapping;

/// The four wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    BasicInfo,
    ContactMapping,
    Schedule,
    Review,
}

impl WizardStep {
    /// One-based step number as shown in the step indicator
    pub fn number(self) -> u8 {
        match self {
            Self::BasicInfo => 1,
            Self::ContactMapping => 2,
            Self::Schedule => 3,
            Self::Review => 4,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::BasicInfo => Some(Self::ContactMapping),
            Self::ContactMapping => Some(Self::Schedule),
            Self::Schedule => Some(Self::Review),
            Self::Review => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            Self::BasicInfo => None,
            Self::ContactMapping => Some(Self::BasicInfo),
            Self::Schedule => Some(Self::ContactMapping),
            Self::Review => Some(Self::Schedule),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BasicInfo => "Basic Info",
            Self::ContactMapping => "Contact Mapping",
            Self::Schedule => "Schedule",
            Self::Review => "Review",
        };
        write!(f, "{label}")
    }
}

/// Everything the submission service needs from a completed wizard run
#[derive(Debug, Clone)]
pub struct CampaignSubmission {
    /// Existing campaign to update when editing, `None` to create
    pub campaign_id: Option<i64>,
    pub campaign: NewCampaign,
    pub contacts: Vec<NewContact>,
}

/// Mutable state of one campaign-creation wizard run
pub struct WizardState {
    step: WizardStep,
    editing: Option<i64>,
    classifier: ContactClassifier,
    table: Option<TableData>,
    mapping: ColumnMapping,
    valid: Vec<Contact>,
    invalid: Vec<InvalidContact>,
    last_errors: ValidationError,
    pub campaign_name: String,
    pub agent_id: String,
    pub agent_name: Option<String>,
    pub from_number: String,
    pub file_name: Option<String>,
    pub schedule_later: bool,
    pub schedule_date: String,
    pub schedule_time: String,
}

impl WizardState {
    /// Fresh wizard for creating a new campaign
    pub fn new() -> Self {
        Self {
            step: WizardStep::BasicInfo,
            editing: None,
            classifier: ContactClassifier::new(),
            table: None,
            mapping: ColumnMapping::default(),
            valid: Vec::new(),
            invalid: Vec::new(),
            last_errors: ValidationError::new(),
            campaign_name: String::new(),
            agent_id: String::new(),
            agent_name: None,
            from_number: String::new(),
            file_name: None,
            schedule_later: false,
            schedule_date: String::new(),
            schedule_time: String::new(),
        }
    }

    /// Wizard prefilled from an existing campaign and its contacts.
    ///
    /// Edit mode satisfies the basic-info gate with the pre-loaded contacts
    /// instead of a freshly uploaded table, and submission updates the
    /// campaign in place.
    pub fn for_edit(campaign: &Campaign, contacts: Vec<Contact>) -> Self {
        let mut state = Self::new();
        state.editing = Some(campaign.campaign_id);
        state.campaign_name = campaign.campaign_name.clone();
        state.agent_id = campaign.assigned_agent_id.clone();
        state.agent_name = campaign.assigned_agent_name.clone();
        state.from_number = campaign.from_number.clone();
        state.file_name = campaign.file_name.clone();
        state.valid = contacts;
        if let Some(when) = campaign.schedule_date {
            state.schedule_later = true;
            state.schedule_date = when.format("%Y-%m-%d").to_string();
            state.schedule_time = when.format("%H:%M").to_string();
        }
        state
    }

    /// Replace the dialing policy, re-classifying any loaded table
    pub fn with_policy(mut self, policy: DialingConfig) -> Self {
        self.classifier = ContactClassifier::with_policy(policy);
        self.reclassify();
        self
    }

    /// Current step
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Campaign id being edited, `None` in create mode
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    /// Field errors recorded by the most recent failed gate
    pub fn last_errors(&self) -> &ValidationError {
        &self.last_errors
    }

    /// The loaded contact table, if any
    pub fn table(&self) -> Option<&TableData> {
        self.table.as_ref()
    }

    /// Current column mapping
    pub fn mapping(&self) -> ColumnMapping {
        self.mapping
    }

    /// Contacts that passed classification
    pub fn valid_contacts(&self) -> &[Contact] {
        &self.valid
    }

    /// Rows rejected by classification
    pub fn invalid_contacts(&self) -> &[InvalidContact] {
        &self.invalid
    }

    /// How many valid contacts are currently selected for submission
    pub fn selected_count(&self) -> usize {
        self.valid.iter().filter(|c| c.selected).count()
    }

    /// Load a parsed contact table, auto-detect columns and classify.
    ///
    /// Replaces any previously loaded table and both contact sets.
    pub fn load_table(&mut self, table: TableData, file_name: Option<String>) {
        self.mapping = ColumnMapping::detect(&table.headers);
        self.table = Some(table);
        self.file_name = file_name;
        self.reclassify();
    }

    /// Remap the phone column and re-classify
    pub fn set_phone_column(&mut self, column: Option<usize>) {
        self.mapping.phone = column;
        self.reclassify();
    }

    /// Remap the name column and re-classify
    pub fn set_name_column(&mut self, column: Option<usize>) {
        self.mapping.name = column;
        self.reclassify();
    }

    /// Toggle one valid contact's selection, returning its new state
    pub fn toggle_contact(&mut self, id: usize) -> Option<bool> {
        let contact = self.valid.iter_mut().find(|c| c.id == id)?;
        contact.selected = !contact.selected;
        Some(contact.selected)
    }

    /// Select or deselect every valid contact
    pub fn select_all(&mut self, selected: bool) {
        for contact in &mut self.valid {
            contact.selected = selected;
        }
    }

    /// Advance to the next step if the current step's gate passes.
    ///
    /// On failure the step is unchanged and the field errors are recorded
    /// and returned. Calling from the final step is a no-op.
    pub fn next_step(&mut self) -> ValidationResult<WizardStep> {
        match self.check_step(self.step) {
            Ok(()) => {
                self.last_errors = ValidationError::new();
                if let Some(next) = self.step.next() {
                    self.step = next;
                }
                Ok(self.step)
            }
            Err(errors) => {
                self.last_errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Go back one step, unconditionally. Floors at the first step.
    pub fn prev_step(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Jump directly to a step at or before the current one.
    ///
    /// Forward jumps are rejected; the step indicator never skips gates.
    pub fn jump_to(&mut self, step: WizardStep) -> ValidationResult<WizardStep> {
        if step > self.step {
            return Err(ValidationError::field(
                "step",
                format!("cannot skip ahead to {step} from {}", self.step),
            ));
        }
        self.step = step;
        Ok(self.step)
    }

    /// The combined schedule timestamp, `None` when starting immediately
    pub fn schedule_timestamp(&self) -> Result<Option<NaiveDateTime>, ScheduleError> {
        if !self.schedule_later {
            return Ok(None);
        }
        combine_date_time(&self.schedule_date, &self.schedule_time).map(Some)
    }

    /// Build the submission payloads from the accumulated state.
    ///
    /// Re-runs every gate first so a submission can never carry state that
    /// would have been rejected on the way through the wizard.
    pub fn submission(&self) -> ValidationResult<CampaignSubmission> {
        let mut combined = ValidationError::new();
        for step in [WizardStep::BasicInfo, WizardStep::ContactMapping, WizardStep::Schedule] {
            if let Err(errors) = self.check_step(step) {
                combined.merge(errors);
            }
        }
        if !combined.is_empty() {
            return Err(combined);
        }

        let schedule_date = self.schedule_timestamp().map_err(schedule_field_error)?;
        let status = if schedule_date.is_some() {
            CampaignStatus::Scheduled
        } else {
            CampaignStatus::Created
        };

        let contacts: Vec<NewContact> =
            self.valid.iter().filter(|c| c.selected).map(NewContact::from).collect();

        let campaign = NewCampaign {
            campaign_name: self.campaign_name.trim().to_string(),
            assigned_agent_id: self.agent_id.clone(),
            from_number: self.from_number.clone(),
            total_contacts: contacts.len() as u32,
            file_name: self.file_name.clone(),
            schedule_date,
            status,
        };

        Ok(CampaignSubmission { campaign_id: self.editing, campaign, contacts })
    }

    fn reclassify(&mut self) {
        if let Some(table) = &self.table {
            let result = self.classifier.classify(table, &self.mapping);
            self.valid = result.valid;
            self.invalid = result.invalid;
        }
    }

    fn check_step(&self, step: WizardStep) -> ValidationResult<()> {
        let mut validator = Validator::new();
        match step {
            WizardStep::BasicInfo => {
                validator
                    .require("campaign_name", &self.campaign_name)
                    .require("assigned_agent_id", &self.agent_id)
                    .require("from_number", &self.from_number);
                if self.table.is_none() && self.valid.is_empty() {
                    validator.add_error("contact_file", "a contact file must be loaded");
                }
            }
            WizardStep::ContactMapping => {
                // Phone mapping is required whenever contacts come from a
                // loaded table; edit mode without a fresh upload has none.
                if self.table.is_some() && !self.mapping.has_phone() {
                    validator.add_error("phone_column", "a phone column must be mapped");
                }
                if self.valid.is_empty() {
                    validator.add_error("contacts", "no valid contacts to submit");
                } else if self.selected_count() == 0 {
                    validator.add_error("contacts", "at least one contact must be selected");
                }
            }
            WizardStep::Schedule => {
                if self.schedule_later {
                    validator
                        .require("schedule_date", &self.schedule_date)
                        .require("schedule_time", &self.schedule_time);
                    if !validator.has_errors() {
                        if let Err(err) =
                            combine_date_time(&self.schedule_date, &self.schedule_time)
                        {
                            validator.add_error(schedule_field(&err), err.to_string());
                        }
                    }
                }
            }
            WizardStep::Review => {}
        }
        validator.finalize()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

fn schedule_field(err: &ScheduleError) -> &'static str {
    match err {
        ScheduleError::InvalidDate { .. } => "schedule_date",
        ScheduleError::InvalidTime { .. } => "schedule_time",
    }
}

fn schedule_field_error(err: ScheduleError) -> ValidationError {
    ValidationError::field(schedule_field(&err), err.to_string())
}
