//! The persistent user and machine PATH values.
//!
//! Values are read through PowerShell's registry provider with UTF-8 console
//! output and without expanding `%VAR%` references, then written back with
//! `reg.exe`. Arguments reach `reg.exe` as UTF-16, so non-ASCII entries
//! survive the round trip. A read that is not valid UTF-8 is refused rather
//! than decoded lossily, since every write replaces the whole value.

use std::process::Command;

use super::{PathStore, Scope, StoreError};

const USER_KEY: &str = r"HKCU\Environment";
const SYSTEM_KEY: &str = r"HKLM\SYSTEM\CurrentControlSet\Control\Session Manager\Environment";
const USER_PROVIDER_KEY: &str = r"Registry::HKEY_CURRENT_USER\Environment";
const SYSTEM_PROVIDER_KEY: &str =
    r"Registry::HKEY_LOCAL_MACHINE\SYSTEM\CurrentControlSet\Control\Session Manager\Environment";
const VALUE_NAME: &str = "Path";
const DEFAULT_VALUE_TYPE: &str = "REG_EXPAND_SZ";

/// A stored registry value: its `REG_*` type and its raw data.
#[derive(Clone, Debug, PartialEq, Eq)]
struct RegistryValue {
    value_type: String,
    data: String,
}

#[derive(Debug, Default)]
pub struct RegistryStore;

impl RegistryStore {
    pub fn new() -> Self {
        RegistryStore
    }

    fn key(scope: Scope) -> &'static str {
        match scope {
            Scope::User => USER_KEY,
            Scope::System => SYSTEM_KEY,
        }
    }

    fn query(scope: Scope) -> Result<Option<RegistryValue>, StoreError> {
        let output = Command::new("powershell")
            .args(["-NoProfile", "-NonInteractive", "-Command"])
            .arg(query_script(scope))
            .output()
            .map_err(|e| StoreError::Registry(format!("could not run powershell: {e}")))?;

        if !output.status.success() {
            return Err(StoreError::Registry(format!(
                "reading {} PATH: {}",
                scope,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        decode_query_output(&output.stdout)
    }
}

impl PathStore for RegistryStore {
    fn get_path(&self, scope: Scope) -> Result<String, StoreError> {
        Ok(Self::query(scope)?.map(|value| value.data).unwrap_or_default())
    }

    fn set_path(&mut self, scope: Scope, raw: &str) -> Result<(), StoreError> {
        let value_type = Self::query(scope)?
            .map(|value| value.value_type)
            .unwrap_or_else(|| DEFAULT_VALUE_TYPE.to_string());

        let output = Command::new("reg")
            .args(["add", Self::key(scope), "/v", VALUE_NAME, "/t"])
            .arg(&value_type)
            .arg("/d")
            .arg(raw)
            .arg("/f")
            .output()
            .map_err(|e| StoreError::Registry(format!("could not run reg.exe: {e}")))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(StoreError::Registry(format!(
                "writing {} PATH: {}",
                scope,
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }
}

// Prints nothing when the value is unset, else `<kind>\n<data>`.
fn query_script(scope: Scope) -> String {
    let key = match scope {
        Scope::User => USER_PROVIDER_KEY,
        Scope::System => SYSTEM_PROVIDER_KEY,
    };
    format!(
        "[Console]::OutputEncoding = New-Object System.Text.UTF8Encoding $false; \
         $k = Get-Item -LiteralPath '{key}'; \
         if ($k.GetValueNames() -contains '{name}') {{ \
         [Console]::Out.Write($k.GetValueKind('{name}').ToString() + \"`n\" + \
         $k.GetValue('{name}', '', 'DoNotExpandEnvironmentNames')) }}",
        key = key,
        name = VALUE_NAME,
    )
}

fn decode_query_output(stdout: &[u8]) -> Result<Option<RegistryValue>, StoreError> {
    let text = std::str::from_utf8(stdout).map_err(|e| {
        StoreError::Registry(format!(
            "PATH value is not valid UTF-8 at byte {}; refusing to rewrite it",
            e.valid_up_to()
        ))
    })?;
    let text = text.trim_start_matches('\u{feff}').trim_end_matches(&['\r', '\n'][..]);
    if text.is_empty() {
        return Ok(None);
    }

    let (kind, data) = text.split_once('\n').unwrap_or((text, ""));
    let value_type = match kind.trim() {
        "ExpandString" => "REG_EXPAND_SZ",
        "String" => "REG_SZ",
        other => {
            return Err(StoreError::Registry(format!(
                "unexpected PATH value kind '{other}'"
            )))
        }
    };
    Ok(Some(RegistryValue {
        value_type: value_type.to_string(),
        data: data.to_string(),
    }))
}
