/// A monitored power outlet: display names plus the on/off flag.
///
/// The flag is only ever changed through [`Outlet::toggle`]; names are only
/// ever changed through [`Outlet::rename`]. Consumption history lives in the
/// model, not here, so renames and toggles survive simulation refreshes.
#[derive(Debug, Clone)]
pub struct Outlet {
    /// Outlet display label.
    pub label: String,
    /// Name of the device behind the outlet.
    pub device_name: String,
    /// Whether the outlet is currently switched on.
    pub is_on: bool,
}

impl Outlet {
    /// Creates an outlet with the given names, switched on.
    pub fn new(label: impl Into<String>, device_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            device_name: device_name.into(),
            is_on: true,
        }
    }

    /// Flips the on/off flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.is_on = !self.is_on;
        self.is_on
    }

    /// Overwrites both display strings. Empty strings are accepted.
    pub fn rename(&mut self, label: impl Into<String>, device_name: impl Into<String>) {
        self.label = label.into();
        self.device_name = device_name.into();
    }
}

#[cfg(test)]
mod tests {
    use super::Outlet;

    #[test]
    fn new_outlet_starts_on() {
        let outlet = Outlet::new("Outlet 1", "Kettle");
        assert!(outlet.is_on);
        assert_eq!(outlet.label, "Outlet 1");
        assert_eq!(outlet.device_name, "Kettle");
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut outlet = Outlet::new("Outlet 1", "Kettle");
        assert!(!outlet.toggle());
        assert!(outlet.toggle());
        assert!(outlet.is_on);
    }

    #[test]
    fn rename_accepts_empty_strings() {
        let mut outlet = Outlet::new("Outlet 1", "Kettle");
        outlet.rename("", "");
        assert_eq!(outlet.label, "");
        assert_eq!(outlet.device_name, "");
    }

    #[test]
    fn rename_does_not_touch_state() {
        let mut outlet = Outlet::new("Outlet 1", "Kettle");
        outlet.toggle();
        outlet.rename("Kitchen", "Toaster");
        assert!(!outlet.is_on);
    }
}
