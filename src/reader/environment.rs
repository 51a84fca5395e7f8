//! The embedded Lua state owned by a reader.

use std::path::Path;

use mlua::{Lua, LuaOptions, StdLib, Value};

use super::{DynamicValue, ReaderError};

/// Exclusively owned Lua interpreter.
///
/// The interpreter is released when the handle drops, including when the
/// reader that would have owned it fails to construct.
pub(crate) struct Environment {
    lua: Lua,
}

impl Environment {
    /// Creates a fresh interpreter with the safe standard libraries loaded.
    pub(crate) fn open(script: &Path) -> Result<Self, ReaderError> {
        let lua = Lua::new_with(StdLib::ALL_SAFE, LuaOptions::default()).map_err(|e| {
            ReaderError::Load {
                path: script.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        live::acquire();
        Ok(Self { lua })
    }

    /// Reads and executes `path` in the global environment.
    pub(crate) fn load_script(&self, path: &Path) -> Result<(), ReaderError> {
        let load_error = |message: String| ReaderError::Load {
            path: path.to_path_buf(),
            message,
        };

        let source = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;

        self.lua
            .load(source.as_str())
            .set_name(format!("@{}", path.display()))
            .exec()
            .map_err(|e| load_error(e.to_string()))
    }

    /// Calls the global `function` with the global `table` and `key`, returning
    /// its first result.
    pub(crate) fn lookup(
        &self,
        function: &str,
        table: &str,
        key: &str,
    ) -> Result<DynamicValue, ReaderError> {
        let call_error = |message: String| ReaderError::Call {
            key: key.to_string(),
            message,
        };

        let globals = self.lua.globals();
        let func = match globals.get::<Value>(function) {
            Ok(Value::Function(func)) => func,
            Ok(other) => {
                return Err(call_error(format!(
                    "global '{function}' is not a function (found {})",
                    other.type_name()
                )))
            }
            Err(e) => return Err(call_error(e.to_string())),
        };
        let configs: Value = globals.get(table).map_err(|e| call_error(e.to_string()))?;

        func.call::<Value>((configs, key))
            .map(DynamicValue::from)
            .map_err(|e| call_error(e.to_string()))
    }

    /// Fetches `table[index]` without invoking metamethods.
    pub(crate) fn raw_index(
        &self,
        table: &mlua::Table,
        index: i64,
        key: &str,
    ) -> Result<DynamicValue, ReaderError> {
        table
            .raw_get::<Value>(index)
            .map(DynamicValue::from)
            .map_err(|e| ReaderError::Call {
                key: format!("{key}[{index}]"),
                message: e.to_string(),
            })
    }
}

impl Drop for Environment {
    fn drop(&mut self) {
        live::release();
    }
}

/// Count of live interpreters on the current thread, for leak checks in tests.
#[cfg(test)]
pub(crate) mod live {
    use std::cell::Cell;

    thread_local! {
        static LIVE: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) fn acquire() {
        LIVE.with(|live| live.set(live.get() + 1));
    }

    pub(crate) fn release() {
        LIVE.with(|live| live.set(live.get() - 1));
    }

    pub(crate) fn count() -> usize {
        LIVE.with(Cell::get)
    }
}

#[cfg(not(test))]
mod live {
    #[inline]
    pub(super) fn acquire() {}

    #[inline]
    pub(super) fn release() {}
}
