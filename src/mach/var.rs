use super::Val;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

pub type Frame = HashMap<String, Val>;

/// ## Variable memory
///
/// Scalars live in a global frame plus, during a user function call, one
/// local frame that shadows it. Arrays are a separate global namespace of
/// sparse tables keyed by the comma-joined subscripts.

#[derive(Debug, Default)]
pub struct Var {
    globals: Frame,
    locals: Option<Frame>,
    arrays: HashMap<String, HashMap<String, Val>>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.globals.clear();
        self.locals = None;
        self.arrays.clear();
    }

    pub fn get(&self, var_name: &str) -> Option<&Val> {
        if let Some(locals) = &self.locals {
            if let Some(val) = locals.get(var_name) {
                return Some(val);
            }
        }
        self.globals.get(var_name)
    }

    pub fn fetch(&self, var_name: &str) -> Result<Val> {
        match self.get(var_name) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(UndefinedVariable; var_name)),
        }
    }

    /// `#` names are constants and go through `define_constant`.
    pub fn store(&mut self, var_name: &str, value: Val) -> Result<()> {
        if var_name.ends_with('#') {
            return self.define_constant(var_name, value);
        }
        self.frame_for(var_name).insert(var_name.to_string(), value);
        Ok(())
    }

    pub fn define_constant(&mut self, var_name: &str, value: Val) -> Result<()> {
        let frame = self.frame_for(var_name);
        if frame.contains_key(var_name) {
            return Err(error!(ConstantRedefined; var_name));
        }
        frame.insert(var_name.to_string(), value);
        Ok(())
    }

    /// Writes into the local frame unconditionally. Used for parameters.
    pub fn bind_local(&mut self, var_name: &str, value: Val) {
        match self.locals.as_mut() {
            Some(locals) => locals.insert(var_name.to_string(), value),
            None => self.globals.insert(var_name.to_string(), value),
        };
    }

    /// Installs a fresh local frame and hands back the one it replaced.
    pub fn enter_scope(&mut self, frame: Frame) -> Option<Frame> {
        self.locals.replace(frame)
    }

    pub fn leave_scope(&mut self, saved: Option<Frame>) {
        self.locals = saved;
    }

    // Existing local, then existing global, then a new local.
    fn frame_for(&mut self, var_name: &str) -> &mut Frame {
        let local = match &self.locals {
            Some(locals) => locals.contains_key(var_name) || !self.globals.contains_key(var_name),
            None => false,
        };
        match (local, self.locals.as_mut()) {
            (true, Some(locals)) => locals,
            _ => &mut self.globals,
        }
    }

    pub fn array_key(subscripts: &[Val]) -> String {
        subscripts
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Declares an empty array, discarding any previous contents.
    pub fn dimension_array(&mut self, var_name: &str) {
        self.arrays.insert(var_name.to_string(), HashMap::new());
    }

    pub fn fetch_array(&self, var_name: &str, subscripts: &[Val]) -> Result<Val> {
        let array = match self.arrays.get(var_name) {
            Some(array) => array,
            None => return Err(error!(ArrayNotDeclared; var_name)),
        };
        Ok(match array.get(&Var::array_key(subscripts)) {
            Some(val) => val.clone(),
            None => Val::default_for(var_name),
        })
    }

    pub fn store_array(&mut self, var_name: &str, subscripts: &[Val], value: Val) -> Result<()> {
        match self.arrays.get_mut(var_name) {
            Some(array) => {
                array.insert(Var::array_key(subscripts), value);
                Ok(())
            }
            None => Err(error!(ArrayNotDeclared; var_name)),
        }
    }

    /// Populated keys, zero for an undeclared array.
    pub fn array_len(&self, var_name: &str) -> usize {
        self.arrays.get(var_name).map_or(0, |array| array.len())
    }

    pub fn has_key(&self, var_name: &str, subscripts: &[Val]) -> bool {
        match self.arrays.get(var_name) {
            Some(array) => array.contains_key(&Var::array_key(subscripts)),
            None => false,
        }
    }

    pub fn delete_key(&mut self, var_name: &str, subscripts: &[Val]) -> Result<()> {
        match self.arrays.get_mut(var_name) {
            Some(array) => {
                array.remove(&Var::array_key(subscripts));
                Ok(())
            }
            None => Err(error!(ArrayNotDeclared; var_name)),
        }
    }

    pub fn delete_array(&mut self, var_name: &str) {
        self.arrays.remove(var_name);
    }
}
