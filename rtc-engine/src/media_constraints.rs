// Copyright 2025 LiveKit, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use parking_lot::Mutex;

use crate::RefCounted;

pub type Constraint = (String, String);

#[derive(Debug, Default)]
pub struct MediaConstraints {
    mandatory: Mutex<Vec<Constraint>>,
    optional: Mutex<Vec<Constraint>>,
}

impl MediaConstraints {
    pub fn create() -> RefCounted<Self> {
        RefCounted::new(Self::default())
    }

    pub fn add_mandatory_constraint(&self, key: &str, value: &str) {
        self.mandatory.lock().push((key.to_owned(), value.to_owned()));
    }

    pub fn add_optional_constraint(&self, key: &str, value: &str) {
        self.optional.lock().push((key.to_owned(), value.to_owned()));
    }

    pub fn mandatory(&self) -> Vec<Constraint> {
        self.mandatory.lock().clone()
    }

    pub fn optional(&self) -> Vec<Constraint> {
        self.optional.lock().clone()
    }

    /// Looks up `key`, mandatory entries take precedence over optional ones.
    pub fn find(&self, key: &str) -> Option<String> {
        let lookup = |list: &Vec<Constraint>| {
            list.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        };
        lookup(&self.mandatory.lock()).or_else(|| lookup(&self.optional.lock()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mandatory_wins_over_optional() {
        let constraints = MediaConstraints::create();
        constraints.add_optional_constraint("DtlsSrtpKeyAgreement", "false");
        constraints.add_mandatory_constraint("DtlsSrtpKeyAgreement", "true");

        assert_eq!(constraints.find("DtlsSrtpKeyAgreement").as_deref(), Some("true"));
        assert_eq!(constraints.find("googIPv6"), None);
        assert_eq!(constraints.mandatory().len(), 1);
        assert_eq!(constraints.optional().len(), 1);
    }
}
