// Copyright (c) UnnamedOrange. Licensed under the MIT License.
// See the LICENSE file in the repository root for full license text.

use std::path::Path;

pub fn load_options(path: Option<&Path>) -> md2latex_core::Result<md2latex_core::Options> {
    match path {
        Some(path) => md2latex_core::config::load_options_from_yaml_file(path),
        None => Ok(md2latex_core::Options::default()),
    }
}
