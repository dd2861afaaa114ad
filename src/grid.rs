use crate::{error::Error, unionfind::UnionFind};

/// N×N grid of sites that can be opened one at a time, answering whether a
/// site is connected to the top row and whether the open sites connect the
/// top row to the bottom row.
///
/// Rows and columns are 1-based in the public interface. Connectivity is
/// tracked by two union-find instances over the same sites. Both have a
/// virtual node joined to every open site in the top row, but only `full`
/// has the virtual node joined to the open sites of the bottom row. Once the
/// grid percolates, every open bottom site is reachable from the top through
/// that bottom node in `full`, so asking `full` whether a site is full would
/// report sites that are only touching the bottom (backwash). `top` never
/// sees the bottom node and answers `is_full`; `full` answers `percolates`.
#[derive(Debug, Clone)]
pub struct ConnectivityGrid {
    n: usize,
    sites: Vec<bool>,
    num_open: usize,
    full: UnionFind,
    top: UnionFind,
}

impl ConnectivityGrid {
    /// Create an `n` by `n` grid with all sites closed.
    pub fn new(n: usize) -> Result<ConnectivityGrid, Error> {
        if n == 0 {
            return Err(Error::InvalidArgument("grid side length must be positive"));
        }
        const TOO_LARGE: Error = Error::InvalidArgument("grid side length is too large");
        let num_sites = n
            .checked_mul(n)
            .filter(|s| s.checked_add(2).is_some())
            .ok_or(TOO_LARGE)?;
        let mut sites = Vec::new();
        sites.try_reserve_exact(num_sites).map_err(|_| TOO_LARGE)?;
        sites.resize(num_sites, false);
        Ok(ConnectivityGrid {
            n,
            sites,
            num_open: 0,
            full: UnionFind::try_new(num_sites + 2).map_err(|_| TOO_LARGE)?,
            top: UnionFind::try_new(num_sites + 1).map_err(|_| TOO_LARGE)?,
        })
    }

    /// Create a grid from a picture of it, one string per row starting with
    /// row 1. Sites marked `#` are opened, any other character is a closed
    /// site. There must be as many characters in each row as there are rows.
    pub fn from_rows(rows: &[&str]) -> Result<ConnectivityGrid, Error> {
        let mut grid = ConnectivityGrid::new(rows.len())?;
        for (ri, row) in rows.iter().enumerate() {
            if row.chars().count() != rows.len() {
                return Err(Error::InvalidArgument("grid rows must form a square"));
            }
            for (ci, c) in row.chars().enumerate() {
                if c == '#' {
                    grid.open(ri + 1, ci + 1)?;
                }
            }
        }
        Ok(grid)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    fn virtual_top(&self) -> usize {
        self.sites.len()
    }

    fn virtual_bottom(&self) -> usize {
        self.sites.len() + 1
    }

    /// Convert a 1-based (row, col) pair into a 0-based row-major index.
    fn index(&self, row: usize, col: usize) -> Result<usize, Error> {
        for i in [row, col] {
            if i < 1 || i > self.n {
                return Err(Error::IndexOutOfRange(i, self.n));
            }
        }
        Ok((row - 1) * self.n + (col - 1))
    }

    fn unite_both(&mut self, a: usize, b: usize) {
        self.full.unite(a, b);
        self.top.unite(a, b);
    }

    /// Open the site at (`row`, `col`) and join it with its open
    /// neighbours. Opening a site that is already open leaves the number of
    /// open sites unchanged.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), Error> {
        let site = self.index(row, col)?;
        if !self.sites[site] {
            self.sites[site] = true;
            self.num_open += 1;
        }
        let (n, top, bottom) = (self.n, self.virtual_top(), self.virtual_bottom());
        if row == 1 {
            self.unite_both(site, top);
        }
        if row == n {
            // Only the full structure knows about the bottom row.
            self.full.unite(site, bottom);
        }
        let neighbors = [
            (row > 1).then(|| site - n),
            (row < n).then(|| site + n),
            (col > 1).then(|| site - 1),
            (col < n).then(|| site + 1),
        ];
        for neighbor in neighbors.into_iter().flatten() {
            if self.sites[neighbor] {
                self.unite_both(site, neighbor);
            }
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, Error> {
        Ok(self.sites[self.index(row, col)?])
    }

    /// A site is full if a path of open sites connects it to the top row.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, Error> {
        let site = self.index(row, col)?;
        Ok(self.top.connected(site, self.virtual_top()))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.num_open
    }

    pub fn percolates(&self) -> bool {
        self.full.connected(self.virtual_top(), self.virtual_bottom())
    }
}
