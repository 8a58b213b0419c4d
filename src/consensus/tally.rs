//! Contagem de votos confiáveis por vencedor declarado.

use crate::types::matches::{SourceResult, Winner};

/// Contagem de votos por lado.
///
/// Só relatórios com `confident == true` e vencedor válido contam.
/// A iteração segue a ordem canônica `[TeamA, TeamB]` e omite lados sem votos.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    counts: [usize; 2],
}

impl VoteTally {
    /// Conta os votos de uma coleção de relatórios.
    pub fn from_sources(sources: &[SourceResult]) -> Self {
        let mut tally = Self::default();
        for winner in sources.iter().filter_map(SourceResult::vote) {
            tally.counts[winner.index()] += 1;
        }
        tally
    }

    /// Votos de um lado.
    pub fn count(&self, winner: Winner) -> usize {
        self.counts[winner.index()]
    }

    /// Total de votos contados.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Pares (lado, votos) com pelo menos um voto, em ordem canônica.
    pub fn iter(&self) -> impl Iterator<Item = (Winner, usize)> + '_ {
        Winner::ALL
            .into_iter()
            .map(|w| (w, self.count(w)))
            .filter(|(_, count)| *count > 0)
    }

    /// Lado com mais votos.
    ///
    /// Varre em ordem canônica e só troca de líder com contagem estritamente
    /// maior: em empate vence `TeamA`. Tally vazio não tem líder.
    pub fn leader(&self) -> Option<(Winner, usize)> {
        let mut best: Option<(Winner, usize)> = None;
        for (winner, count) in self.iter() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((winner, count)),
            }
        }
        best
    }
}
