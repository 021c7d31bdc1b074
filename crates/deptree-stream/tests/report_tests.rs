// Dweve DepTree - Gradle Dependency Report Parser
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests over full report texts.

use deptree_stream::{ConfigurationVocabulary, Project, ReportParser};
use std::io::Cursor;

/// A report in the shape `gradle dependencies` actually prints: underlined
/// headers, configuration descriptions, empty configurations, overrides,
/// omission markers, and repeat references.
const FULL_REPORT: &str = "\
------------------------------------------------------------
Project ':app'
------------------------------------------------------------

compileClasspath - Compile classpath for source set 'main'.
+--- com.example:core:1.0
+--- org.slf4j:slf4j-api:1.7 -> 2.0
|    \\--- org.slf4j:slf4j-core:1.7 (*)
\\--- junit:junit:4

runtimeOnly - Runtime only dependencies for source set 'main'.
No dependencies

------------------------------------------------------------
Project ':app-lib'
------------------------------------------------------------

api - API dependencies for source set 'main'.
+--- com.example:util:2.1 (*)
\\--- com.example:core:1.0
";

fn parse_all(input: &str) -> (Vec<Project>, ReportParser<Cursor<String>>) {
    let mut parser = ReportParser::new(Cursor::new(input.to_string()));
    let mut projects = Vec::new();
    while let Some(project) = parser.parse_next_project().expect("parse failed") {
        projects.push(project);
    }
    (projects, parser)
}

#[test]
fn test_full_report_projects() {
    let (projects, _) = parse_all(FULL_REPORT);
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name_literal(), "app");
    assert_eq!(projects[1].name_literal(), "app-lib");
}

#[test]
fn test_full_report_first_section() {
    let (projects, _) = parse_all(FULL_REPORT);
    let app = &projects[0];

    // The repeat entry is not in the project list.
    assert_eq!(app.dependencies.len(), 3);

    let core = &app.dependencies[0];
    assert_eq!(core.coordinate(), "com.example:core");
    assert_eq!(core.configuration.literal, "compileClasspath");
    assert_eq!(core.version.as_ref().unwrap().literal, "1.0");
    assert!(core.resolved_version.is_none());

    let slf4j = &app.dependencies[1];
    assert_eq!(slf4j.coordinate(), "org.slf4j:slf4j-api");
    assert_eq!(slf4j.version.as_ref().unwrap().literal, "1.7");
    assert_eq!(slf4j.resolved_version.as_ref().unwrap().literal, "2.0");

    let junit = &app.dependencies[2];
    assert_eq!(junit.coordinate(), "junit:junit");
    assert_eq!(junit.version.as_ref().unwrap().literal, "4");
}

#[test]
fn test_full_report_second_section() {
    let (projects, _) = parse_all(FULL_REPORT);
    let lib = &projects[1];

    assert_eq!(lib.dependencies.len(), 2);
    for dep in &lib.dependencies {
        assert_eq!(dep.project, "app-lib");
        assert_eq!(dep.configuration.literal, "api");
    }
    assert_eq!(lib.dependencies[0].coordinate(), "com.example:util");
    // Annotated entries never get a resolved version.
    assert!(lib.dependencies[0].resolved_version.is_none());
}

#[test]
fn test_full_report_flat_list_includes_repeats() {
    let (projects, parser) = parse_all(FULL_REPORT);
    let all = parser.all_dependencies();

    // 4 entries under :app (one a repeat) + 2 under :app-lib.
    assert_eq!(all.len(), 6);
    assert_eq!(all.iter().filter(|d| d.repeat).count(), 1);

    let repeated = all.iter().find(|d| d.repeat).unwrap();
    assert_eq!(repeated.coordinate(), "org.slf4j:slf4j-core");
    assert_eq!(repeated.version.as_ref().unwrap().literal, "1.7");
    assert!(repeated.resolved_version.is_none());

    // Every entry's owning project names a parsed project.
    for dep in all {
        assert!(
            projects.iter().any(|p| p.name_literal() == dep.project),
            "dangling project reference: {}",
            dep.project
        );
    }
}

#[test]
fn test_full_report_offsets_match_source() {
    let (projects, parser) = parse_all(FULL_REPORT);
    let chars: Vec<char> = FULL_REPORT.chars().collect();

    for project in &projects {
        let text: String = chars[project.name.start..project.name.end].iter().collect();
        assert_eq!(text, project.name.literal);
    }
    for dep in parser.all_dependencies() {
        let text: String = chars[dep.name.start..dep.name.end].iter().collect();
        assert_eq!(text, dep.name.literal);
    }
}

#[test]
fn test_crlf_report() {
    let report = FULL_REPORT.replace('\n', "\r\n");
    let mut parser = ReportParser::new(Cursor::new(report));
    let mut names = Vec::new();
    while let Some(project) = parser.parse_next_project().unwrap() {
        names.push(project.name_literal().to_string());
    }
    assert_eq!(names, vec!["app", "app-lib"]);
    assert_eq!(parser.all_dependencies().len(), 6);
}

#[test]
fn test_report_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(FULL_REPORT.as_bytes()).expect("write report");

    let handle = file.reopen().expect("reopen");
    let parser = ReportParser::new(std::io::BufReader::new(handle));
    let projects: Vec<Project> = parser.collect::<Result<_, _>>().expect("parse failed");
    assert_eq!(projects.len(), 2);
}

#[test]
fn test_preamble_before_first_header_is_ignored() {
    let report = "> Task :dependencies\n\nProject ':demo'\n\napi - x\n+--- a:b:1\n";
    let (projects, _) = parse_all(report);
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].dependencies.len(), 1);
}

#[test]
fn test_custom_vocabulary_end_to_end() {
    let report = "\
Project ':demo'

integrationTestImplementation - custom bucket
+--- com.example:it:0.4
";
    let vocabulary =
        ConfigurationVocabulary::new().with_configuration("integrationTestImplementation");
    let mut parser = ReportParser::with_vocabulary(Cursor::new(report.to_string()), vocabulary);
    let project = parser.parse_next_project().unwrap().unwrap();
    assert_eq!(
        project.dependencies[0].configuration.literal,
        "integrationTestImplementation"
    );
}

#[test]
fn test_error_carries_offset_into_source() {
    let report = "Project ':demo'\n\nwrong - x\n+--- a:b:1\n";
    let mut parser = ReportParser::new(Cursor::new(report.to_string()));
    let err = parser.parse_next_project().unwrap_err();

    let (start, end) = err.offsets();
    assert_eq!(&report[start..end], "wrong");
    assert_eq!(err.literal(), "wrong");
}
