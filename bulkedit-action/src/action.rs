use bulkedit_form::{FormNode, FormState};
use bulkedit_model::{BundleDescriptor, EditConfiguration, Record};

use crate::{BulkEditSettings, ExecuteOutcome, Executor, FormBuilder, Host, Result};

/// The bulk-edit action plugin: renders the dialog, keeps the submitted
/// configuration and runs it against each selected record.
pub struct EditAction {
    form: FormBuilder,
    executor: Executor,
    configuration: EditConfiguration,
}

impl EditAction {
    pub fn new(host: Host, settings: BulkEditSettings) -> Self {
        Self {
            form: FormBuilder::new(host.clone(), settings.clone()),
            executor: Executor::new(host, settings),
            configuration: EditConfiguration::default(),
        }
    }

    /// Restores a previously stored configuration.
    #[must_use]
    pub fn with_configuration(mut self, configuration: EditConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    /// Restores an action from a configuration stored with
    /// [`stored_configuration`](Self::stored_configuration).
    pub fn from_stored(host: Host, settings: BulkEditSettings, stored: &str) -> Result<Self> {
        let configuration = EditConfiguration::from_json(stored)?;
        Ok(Self::new(host, settings).with_configuration(configuration))
    }

    pub fn configuration(&self) -> &EditConfiguration {
        &self.configuration
    }

    /// Serializes the configuration for storage between requests.
    pub fn stored_configuration(&self) -> Result<String> {
        Ok(self.configuration.to_json()?)
    }

    pub fn build_form(
        &self,
        shell: FormNode,
        state: &mut FormState,
        bundles: &[BundleDescriptor],
    ) -> Result<FormNode> {
        self.form.build_form(shell, state, bundles)
    }

    /// Replaces the stored configuration with the submitted one.
    pub fn submit_configuration(&mut self, form: &FormNode, state: &FormState) -> Result<&EditConfiguration> {
        self.configuration = self.form.submit_configuration(form, state)?;
        Ok(&self.configuration)
    }

    pub fn execute(&self, record: &Record) -> Result<ExecuteOutcome> {
        self.executor.execute(record, &self.configuration)
    }

    /// Runs [`execute`](Self::execute) for each record in order, collecting
    /// every outcome; a failure does not stop later records.
    pub fn execute_multiple(&self, records: &[Record]) -> Vec<Result<ExecuteOutcome>> {
        records.iter().map(|record| self.execute(record)).collect()
    }
}
