use std::str::SplitWhitespace;

/// Facts accumulated from one porcelain-v2 status report.
///
/// Counters only ever grow while lines are fed; unrecognized lines are
/// ignored rather than rejected, so reports from newer Git versions degrade
/// gracefully. `has_upstream` flips to `true` only when a `branch.ab`
/// header is seen, which Git emits exactly when a tracking branch is
/// configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFacts {
    modified: u32,
    type_changed: u32,
    added: u32,
    deleted: u32,
    renamed: u32,
    copied: u32,
    unmerged: u32,
    untracked: u32,
    stashed: u32,
    ahead: u32,
    has_upstream: bool,
}

impl StatusFacts {
    /// Parses a complete status report.
    pub fn parse(input: &str) -> Self {
        let mut facts = Self::default();
        for line in input.lines() {
            facts.feed_line(line);
        }
        facts
    }

    /// Consumes a single report line.
    pub fn feed_line(&mut self, line: &str) {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("#") => self.feed_header(words),
            Some("1") | Some("2") => {
                if let Some(xy) = words.next() {
                    self.feed_xy(xy);
                }
            }
            Some("u") => self.unmerged += 1,
            Some("?") => self.untracked += 1,
            _ => {}
        }
    }

    // Headers look like `# stash 1` and `# branch.ab +4 -2`. The behind
    // count of `branch.ab` is pull work, not unsaved work, and is dropped.
    fn feed_header(&mut self, mut words: SplitWhitespace<'_>) {
        match words.next() {
            Some("stash") => {
                if let Some(count) = words.next().and_then(|word| word.parse().ok()) {
                    self.stashed = count;
                }
            }
            Some("branch.ab") => {
                self.has_upstream = true;
                if let Some(ahead) = words
                    .next()
                    .and_then(|word| word.trim_start_matches('+').parse().ok())
                {
                    self.ahead = ahead;
                }
            }
            _ => {}
        }
    }

    // Both positions of the XY code are independent facts: `CD` counts one
    // copy and one deletion.
    fn feed_xy(&mut self, xy: &str) {
        for code in xy.chars() {
            match code {
                'M' => self.modified += 1,
                'T' => self.type_changed += 1,
                'A' => self.added += 1,
                'D' => self.deleted += 1,
                'R' => self.renamed += 1,
                'C' => self.copied += 1,
                _ => {}
            }
        }
    }

    /// True iff nothing is left to commit, merge, stash or push *and* a
    /// tracking branch exists. A repository with no upstream has no push
    /// destination, which is itself a signal worth surfacing.
    pub fn is_clean(&self) -> bool {
        self.committable() == 0
            && self.unmerged == 0
            && self.stashed == 0
            && self.ahead == 0
            && self.has_upstream
    }

    /// A comma-joined, fixed-order description of everything unsaved.
    /// Empty for a clean repository.
    pub fn summary(&self) -> String {
        let mut phrases = Vec::new();

        let committable = self.committable();
        if committable > 0 {
            phrases.push(format!(
                "{} {} to commit",
                committable,
                pluralize(committable, "file", "files")
            ));
        }

        if self.unmerged > 0 {
            phrases.push(format!(
                "{} {} to merge",
                self.unmerged,
                pluralize(self.unmerged, "file", "files")
            ));
        }

        if self.stashed > 0 {
            phrases.push(format!(
                "{} {}",
                self.stashed,
                pluralize(self.stashed, "stash", "stashes")
            ));
        }

        if self.ahead > 0 {
            phrases.push(format!(
                "{} unpushed {}",
                self.ahead,
                pluralize(self.ahead, "commit", "commits")
            ));
        }

        if !self.has_upstream {
            phrases.push("missing upstream".to_string());
        }

        phrases.join(", ")
    }

    fn committable(&self) -> u32 {
        self.modified
            + self.type_changed
            + self.added
            + self.deleted
            + self.renamed
            + self.copied
            + self.untracked
    }
}

fn pluralize<'w>(count: u32, singular: &'w str, plural: &'w str) -> &'w str {
    if count == 1 { singular } else { plural }
}
