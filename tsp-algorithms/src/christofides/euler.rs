use tsp_instance::TspError;

/// Undirected multigraph with destructive edge consumption. Both endpoints
/// share one edge id with a `used` flag, so a traversal removes each edge
/// exactly once no matter which endpoint consumes it first.
pub(crate) struct Multigraph {
    adj: Vec<Vec<(usize, usize)>>, // (neighbor, edge id), slot 0 unused
    used: Vec<bool>,
    cursor: Vec<usize>, // per-vertex scan position over consumed prefixes
}

impl Multigraph {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n + 1],
            used: Vec::new(),
            cursor: vec![0; n + 1],
        }
    }

    pub fn add_edge(&mut self, u: usize, v: usize) {
        let id = self.used.len();
        self.used.push(false);
        self.adj[u].push((v, id));
        self.adj[v].push((u, id));
    }

    /// Hierholzer's algorithm with an explicit stack: while the top vertex
    /// has an unconsumed incident edge, consume it and descend; otherwise
    /// pop it onto the circuit. The popped sequence is the circuit in
    /// reverse. Fails if any vertex has odd degree.
    pub fn eulerian_circuit(mut self, start: usize) -> Result<Vec<usize>, TspError> {
        for v in 1..self.adj.len() {
            if self.adj[v].len() % 2 != 0 {
                return Err(TspError::InvariantViolation(format!(
                    "vertex {v} has odd degree {} in the Eulerian multigraph",
                    self.adj[v].len()
                )));
            }
        }

        let mut stack = vec![start];
        let mut circuit = Vec::with_capacity(self.used.len() + 1);
        while let Some(&u) = stack.last() {
            match self.next_unused(u) {
                Some((v, id)) => {
                    self.used[id] = true;
                    stack.push(v);
                }
                None => {
                    circuit.push(u);
                    stack.pop();
                }
            }
        }
        circuit.reverse();
        Ok(circuit)
    }

    fn next_unused(&mut self, u: usize) -> Option<(usize, usize)> {
        while self.cursor[u] < self.adj[u].len() {
            let (v, id) = self.adj[u][self.cursor[u]];
            if self.used[id] {
                self.cursor[u] += 1;
                continue;
            }
            return Some((v, id));
        }
        None
    }
}
