// SPDX-License-Identifier: MPL-2.0
//! Host module discovery.
//!
//! Resources are namespaced by the module that ships them, but an icon is
//! usually declared through markup, so the module that immediately creates
//! the widget is infrastructure rather than the application. The locator
//! walks the declaration chain (innermost first) and skips:
//!
//! - the widget's own module
//! - modules signed with the platform's framework token
//! - the markup processing module
//!
//! The first remaining module is the host. When nothing qualifies the
//! caller falls back to the entry module.

use crate::config::defaults;
use crate::module::Module;
use std::collections::HashSet;

/// Descriptor of this crate, used as the widget's own module by default.
pub const WIDGET_MODULE: &str = concat!(
    env!("CARGO_PKG_NAME"),
    ", Version=",
    env!("CARGO_PKG_VERSION"),
    ", Culture=neutral, PublicKeyToken=null"
);

/// Filters applied when searching a declaration chain for the host module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    own_module: String,
    platform_key_token: String,
    markup_module: String,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            own_module: WIDGET_MODULE.to_string(),
            platform_key_token: defaults::PLATFORM_KEY_TOKEN.to_string(),
            markup_module: defaults::MARKUP_MODULE.to_string(),
        }
    }
}

impl Locator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Full descriptor of the module the widget itself is defined in.
    #[must_use]
    pub fn with_own_module(mut self, full_name: impl Into<String>) -> Self {
        self.own_module = full_name.into();
        self
    }

    /// Signing token shared by platform framework modules.
    #[must_use]
    pub fn with_platform_key_token(mut self, token: impl Into<String>) -> Self {
        self.platform_key_token = token.into();
        self
    }

    /// Simple name of the markup processing module.
    #[must_use]
    pub fn with_markup_module(mut self, name: impl Into<String>) -> Self {
        self.markup_module = name.into();
        self
    }

    pub fn own_module(&self) -> &str {
        &self.own_module
    }

    /// Returns `true` for modules that can never own the icon's resources.
    #[must_use]
    pub fn is_infrastructure(&self, module: &Module) -> bool {
        module.full_name() == self.own_module
            || module.descriptor().token() == self.platform_key_token
            || module.name() == self.markup_module
    }

    /// Returns the first non-infrastructure module of `chain`.
    ///
    /// Modules appearing more than once are considered at their first
    /// position only. Returns `None` when every module is filtered out.
    pub fn locate<'a, I>(&self, chain: I) -> Option<&'a Module>
    where
        I: IntoIterator<Item = &'a Module>,
    {
        let mut seen = HashSet::new();

        chain
            .into_iter()
            .filter(|&module| seen.insert(module.full_name()))
            .find(|module| !self.is_infrastructure(module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLATFORM: &str = "mscorlib, Version=2.0.5.0, Culture=neutral, PublicKeyToken=7cec85d7bea7798e";
    const MARKUP: &str = "Xamarin.Forms.Xaml, Version=2.0.0.0, Culture=neutral, PublicKeyToken=null";
    const APP: &str = "MyApp, Version=1.0.0.0, Culture=neutral, PublicKeyToken=null";

    fn module(full_name: &str) -> Module {
        Module::without_resources(full_name)
    }

    #[test]
    fn skips_infrastructure_frames() {
        let chain = [
            module(WIDGET_MODULE),
            module(MARKUP),
            module(PLATFORM),
            module(APP),
        ];
        let host = Locator::new().locate(&chain).expect("host should be found");
        assert_eq!(host.name(), "MyApp");
    }

    #[test]
    fn only_own_module_yields_none() {
        let chain = [module(WIDGET_MODULE), module(WIDGET_MODULE)];
        assert!(Locator::new().locate(&chain).is_none());
    }

    #[test]
    fn empty_chain_yields_none() {
        let chain: [Module; 0] = [];
        assert!(Locator::new().locate(&chain).is_none());
    }

    #[test]
    fn first_qualifying_module_wins() {
        let chain = [
            module(MARKUP),
            module("Feature, Version=1.0"),
            module(APP),
        ];
        let host = Locator::new().locate(&chain).expect("host should be found");
        assert_eq!(host.name(), "Feature");
    }

    #[test]
    fn duplicates_are_visited_once() {
        let chain = [module(MARKUP), module(MARKUP), module(APP), module(APP)];
        assert_eq!(
            Locator::new().locate(&chain).map(Module::name),
            Some("MyApp")
        );
    }

    #[test]
    fn custom_filters_are_honoured() {
        let locator = Locator::new()
            .with_own_module("Widgets, Version=3.0")
            .with_platform_key_token("feedface")
            .with_markup_module("Markup.Engine");
        let chain = [
            module("Widgets, Version=3.0"),
            module("Markup.Engine, Version=1.0"),
            module("System.Core, PublicKeyToken=feedface"),
            module(MARKUP),
        ];
        // Default markup name is no longer filtered.
        let host = locator.locate(&chain).expect("host should be found");
        assert_eq!(host.name(), "Xamarin.Forms.Xaml");
    }

    #[test]
    fn own_module_matches_on_full_descriptor() {
        let locator = Locator::new().with_own_module("Widgets, Version=3.0");
        assert!(!locator.is_infrastructure(&module("Widgets, Version=4.0")));
        assert!(locator.is_infrastructure(&module("Widgets, Version=3.0")));
    }
}
