//! License text rendering
//!
//! Each supported license is a fixed legal text with the copyright line filled
//! in from the current year and the author's name and email.

use chrono::Datelike;
use std::fmt;

/// License choices offered by the template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum License {
    Mit,
    Apache2,
    Bsd3Clause,
    Proprietary,
    /// The `none` sentinel: the project ships without a license file
    None,
    /// Any other rendered value; renders to nothing
    Unrecognized(String),
}

impl License {
    /// Parse the rendered `license` answer (exact, case-sensitive names)
    pub fn parse(name: &str) -> Self {
        match name {
            "MIT" => License::Mit,
            "Apache-2.0" => License::Apache2,
            "BSD-3-Clause" => License::Bsd3Clause,
            "Proprietary" => License::Proprietary,
            "none" => License::None,
            other => License::Unrecognized(other.to_string()),
        }
    }

    /// Template-facing name of this license
    pub fn name(&self) -> &str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
            License::Bsd3Clause => "BSD-3-Clause",
            License::Proprietary => "Proprietary",
            License::None => "none",
            License::Unrecognized(name) => name.as_str(),
        }
    }

    /// Render the license document for `year`.
    ///
    /// Returns an empty string for `none` and unrecognized names.
    pub fn render(&self, author: &str, email: &str, year: i32) -> String {
        match self {
            License::Mit => format!(
                r#"MIT License

Copyright (c) {year} {author} <{email}>

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#
            ),
            License::Apache2 => format!(
                r#"Apache License
Version 2.0, January 2004
http://www.apache.org/licenses/

Copyright {year} {author} <{email}>

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
"#
            ),
            License::Bsd3Clause => format!(
                r#"BSD 3-Clause License

Copyright (c) {year}, {author} <{email}>
All rights reserved.

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions are met:

1. Redistributions of source code must retain the above copyright notice, this
   list of conditions and the following disclaimer.

2. Redistributions in binary form must reproduce the above copyright notice,
   this list of conditions and the following disclaimer in the documentation
   and/or other materials provided with the distribution.

3. Neither the name of the copyright holder nor the names of its
   contributors may be used to endorse or promote products derived from
   this software without specific prior written permission.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE FOR
ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES
(INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES;
LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON
ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
(INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE OF THIS
SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
"#
            ),
            License::Proprietary => format!(
                r#"All Rights Reserved

Copyright (c) {year} {author} <{email}>

This software is proprietary and confidential. Unauthorized copying, distribution,
modification, or use is prohibited.
"#
            ),
            License::None | License::Unrecognized(_) => String::new(),
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Render a license by template-facing name for the current year
pub fn render_license(name: &str, author: &str, email: &str) -> String {
    License::parse(name).render(author, email, current_year())
}
