//! Random folder forest generator for sample data.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use folderhub_core::config::generator::GeneratorConfig;
use folderhub_core::result::AppResult;
use folderhub_core::types::OrgId;
use folderhub_entity::folder::Folder;

use super::FolderSource;
use super::names::NameGenerator;

/// Every root whose index is a multiple of this gets a fresh organization.
const FOREIGN_ORG_EVERY: usize = 3;

/// Builds random forests bounded by a [`GeneratorConfig`].
///
/// Each root is followed by its descendants depth-first, so every
/// record's parent precedes it.
#[derive(Debug, Clone)]
pub struct RandomTreeGenerator {
    config: GeneratorConfig,
    default_org_id: OrgId,
    seed: Option<u64>,
}

impl RandomTreeGenerator {
    /// Creates a generator assigning non-foreign roots to `default_org_id`.
    pub fn new(config: GeneratorConfig, default_org_id: OrgId) -> Self {
        Self {
            config,
            default_org_id,
            seed: None,
        }
    }

    /// Makes every [`generate`](Self::generate) call reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates a forest using the configured seed or the thread RNG.
    pub fn generate(&self) -> Vec<Folder> {
        match self.seed {
            Some(seed) => self.generate_with(&mut StdRng::seed_from_u64(seed)),
            None => self.generate_with(&mut rand::rng()),
        }
    }

    /// Generates a forest drawing randomness from `rng`.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<Folder> {
        let mut names = NameGenerator::new();
        let mut folders = Vec::new();

        for i in 0..self.config.max_root_set {
            let org_id = if i % FOREIGN_ORG_EVERY == 0 {
                OrgId::from_random_bytes(rng.random())
            } else {
                self.default_org_id
            };

            let root = Folder::root(names.next(rng), org_id);
            self.grow(rng, &mut names, root, 1, &mut folders);
        }

        debug!(count = folders.len(), "Generated sample folders");
        folders
    }

    fn grow<R: Rng>(
        &self,
        rng: &mut R,
        names: &mut NameGenerator,
        folder: Folder,
        depth: usize,
        out: &mut Vec<Folder>,
    ) {
        let index = out.len();
        out.push(folder);

        if depth >= self.config.max_depth {
            return;
        }

        let child_count = rng.random_range(1..=self.config.max_child.max(1));
        for _ in 0..child_count {
            let child = out[index].child(names.next(rng));
            self.grow(rng, names, child, depth + 1, out);
        }
    }
}

#[async_trait]
impl FolderSource for RandomTreeGenerator {
    async fn load(&self) -> AppResult<Vec<Folder>> {
        self.config.validate()?;
        Ok(self.generate())
    }

    fn describe(&self) -> String {
        format!(
            "random forest (roots={}, children<={}, depth<={})",
            self.config.max_root_set, self.config.max_child, self.config.max_depth
        )
    }
}
