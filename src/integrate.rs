//! Integration of functions over triangle meshes
use crate::mesh::TriangleMesh;
use crate::quadrature::gauss_jacobi::GaussJacobi;
use crate::quadrature::stroud::{ConicalRule, StroudNodes};
use crate::traits::{Integrand, JacobiRuleProvider};
use crate::types::{cast, AreaConvention, QuadratureError, RealScalar, Result};
use itertools::izip;
use log::debug;
use rayon::prelude::*;

/// Options for an integrator
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationOptions {
    /// Number of points per axis of the conical rule
    pub order: usize,
    /// Maximum number of cells in each batch sent to the thread pool
    pub batch_size: usize,
    /// Area convention used when the areas are computed from the mesh
    pub area_convention: AreaConvention,
}

impl Default for IntegrationOptions {
    fn default() -> Self {
        Self {
            order: 5,
            batch_size: 128,
            area_convention: AreaConvention::Signed,
        }
    }
}

/// Integrator using Stroud conical rules.
///
/// Cells are processed in batches in parallel. The sums of the batches are
/// added up in batch order, so the result does not depend on the number of threads.
pub struct StroudIntegrator<P: JacobiRuleProvider = GaussJacobi> {
    rule_provider: P,
    options: IntegrationOptions,
}

impl Default for StroudIntegrator<GaussJacobi> {
    fn default() -> Self {
        Self::new(IntegrationOptions::default())
    }
}

impl StroudIntegrator<GaussJacobi> {
    /// Create an integrator that uses the built-in Gauss-Jacobi rules
    pub fn new(options: IntegrationOptions) -> Self {
        Self::with_rule_provider(GaussJacobi, options)
    }
}

impl<P: JacobiRuleProvider> StroudIntegrator<P> {
    /// Create an integrator that takes its one dimensional rules from `rule_provider`
    pub fn with_rule_provider(rule_provider: P, options: IntegrationOptions) -> Self {
        Self {
            rule_provider,
            options,
        }
    }

    /// Get the options
    pub fn options(&self) -> &IntegrationOptions {
        &self.options
    }

    /// Get the rule provider
    pub fn rule_provider(&self) -> &P {
        &self.rule_provider
    }

    /// Set the number of points per axis
    pub fn order(&mut self, order: usize) -> &mut Self {
        self.options.order = order;
        self
    }

    /// Set the maximum number of cells in a batch
    pub fn batch_size(&mut self, size: usize) -> &mut Self {
        self.options.batch_size = size;
        self
    }

    /// Set the area convention
    pub fn area_convention(&mut self, convention: AreaConvention) -> &mut Self {
        self.options.area_convention = convention;
        self
    }

    /// The conical rule for the current order
    pub fn reference_rule<T: RealScalar>(&self) -> Result<ConicalRule<T>> {
        ConicalRule::new(&self.rule_provider, self.options.order)
    }

    /// Compute the Stroud points of every cell of a mesh
    pub fn generate_nodes<T: RealScalar>(&self, mesh: &TriangleMesh<T>) -> Result<StroudNodes<T>> {
        Ok(self.reference_rule::<T>()?.generate_nodes(mesh))
    }

    /// Integrate over the mesh, with the cell areas computed using the configured convention.
    pub fn integrate<T: RealScalar>(
        &self,
        mesh: &TriangleMesh<T>,
        integrand: &impl Integrand<T>,
    ) -> Result<T> {
        let rule = self.reference_rule()?;
        let areas = mesh.areas(self.options.area_convention);
        Ok(self.integrate_with_rule(&rule, mesh, &areas, integrand))
    }

    /// Integrate over the mesh, with the area of each cell supplied by the caller.
    ///
    /// The contribution of each cell is scaled by its area, so negative areas
    /// flip the sign of a contribution and zero areas remove it.
    pub fn integrate_with_areas<T: RealScalar>(
        &self,
        mesh: &TriangleMesh<T>,
        areas: &[T],
        integrand: &impl Integrand<T>,
    ) -> Result<T> {
        let rule = self.reference_rule()?;
        if areas.len() != mesh.number_of_cells() {
            return Err(QuadratureError::AreaCountMismatch {
                expected: mesh.number_of_cells(),
                actual: areas.len(),
            });
        }
        Ok(self.integrate_with_rule(&rule, mesh, areas, integrand))
    }

    fn integrate_with_rule<T: RealScalar>(
        &self,
        rule: &ConicalRule<T>,
        mesh: &TriangleMesh<T>,
        areas: &[T],
        integrand: &impl Integrand<T>,
    ) -> T {
        let ncells = mesh.number_of_cells();
        let batch_size = self.options.batch_size.max(1);

        let mut batches = vec![];
        let mut start = 0;
        while start < ncells {
            let end = std::cmp::min(start + batch_size, ncells);
            batches.push((start, end));
            start = end;
        }

        debug!(
            "Integrating over {ncells} cells with {} points per cell in {} batches",
            rule.number_of_points(),
            batches.len()
        );

        let batch_sums = batches
            .into_par_iter()
            .map(|(start, end)| integrate_batch(rule, mesh, areas, integrand, start, end))
            .collect::<Vec<_>>();

        batch_sums.into_iter().fold(T::zero(), |acc, value| acc + value)
    }
}

/// Sum of the contributions of cells `start..end`.
fn integrate_batch<T: RealScalar>(
    rule: &ConicalRule<T>,
    mesh: &TriangleMesh<T>,
    areas: &[T],
    integrand: &impl Integrand<T>,
    start: usize,
    end: usize,
) -> T {
    let npoints = rule.number_of_points();
    let size = npoints * (end - start);

    let mut x = vec![T::zero(); size];
    let mut y = vec![T::zero(); size];
    let mut values = vec![T::zero(); size];

    for (cell, cell_x, cell_y) in izip!(
        start..end,
        x.chunks_exact_mut(npoints),
        y.chunks_exact_mut(npoints)
    ) {
        rule.map_to_cell(&mesh.cell_vertices(cell), cell_x, cell_y);
    }

    integrand.evaluate_batch(&x, &y, &mut values);

    // The weights sum to the area of the reference triangle, so each cell is
    // scaled by the determinant of its affine map, twice its area.
    let two = cast::<T>(2.0);
    izip!(&areas[start..end], values.chunks_exact(npoints))
        .map(|(&area, cell_values)| two * area * rule.contract(cell_values))
        .fold(T::zero(), |acc, value| acc + value)
}

/// Integrate `integrand` over a mesh with a conical rule of `order` points per axis.
///
/// The contribution of each cell is weighted by its signed area.
pub fn integrate<T: RealScalar>(
    mesh: &TriangleMesh<T>,
    integrand: &impl Integrand<T>,
    order: usize,
) -> Result<T> {
    StroudIntegrator::new(IntegrationOptions {
        order,
        ..Default::default()
    })
    .integrate(mesh, integrand)
}

/// Integrate `integrand` over a mesh, weighting each cell by the supplied area.
pub fn integrate_with_areas<T: RealScalar>(
    mesh: &TriangleMesh<T>,
    areas: &[T],
    integrand: &impl Integrand<T>,
    order: usize,
) -> Result<T> {
    StroudIntegrator::new(IntegrationOptions {
        order,
        ..Default::default()
    })
    .integrate_with_areas(mesh, areas, integrand)
}
