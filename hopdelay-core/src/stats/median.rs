use crate::error::DelayError;

/// Median by bounded-heap selection.
///
/// With `k = n / 2 + 1`, a min-heap of capacity `k` is seeded with the first `k` values and
/// every later value larger than the root replaces it. Afterwards the heap holds the `k`
/// largest values and its root sits at sorted rank `n - k`: the middle element for odd `n`,
/// the lower of the two middle elements for even `n`.
pub struct OrderStatisticSelector;

impl OrderStatisticSelector {
    pub fn median(values: &[i64]) -> Result<f64, DelayError> {
        let n = values.len();

        match n {
            0 => return Err(DelayError::InsufficientData),
            1 => return Ok(values[0] as f64),
            // The heap would hold both values with no second child under the root.
            2 => return Ok(average(values[0], values[1])),
            _ => {}
        }

        let k = n / 2 + 1;
        let mut heap = BoundedMinHeap::heapify(values[..k].to_vec());
        for &x in &values[k..] {
            heap.offer(x);
        }

        if n % 2 == 1 {
            Ok(heap.root() as f64)
        } else {
            Ok(average(heap.root(), heap.second_smallest()))
        }
    }
}

fn average(a: i64, b: i64) -> f64 {
    (i128::from(a) + i128::from(b)) as f64 / 2.0
}

/// Array-backed min-heap that never grows past its seed size.
struct BoundedMinHeap {
    slots: Vec<i64>,
}

impl BoundedMinHeap {
    fn heapify(slots: Vec<i64>) -> Self {
        let mut heap = Self { slots };
        for parent in (0..heap.slots.len() / 2).rev() {
            heap.sift_down(parent);
        }
        heap
    }

    fn root(&self) -> i64 {
        self.slots[0]
    }

    /// Only meaningful with three or more slots: the answer is one of the root's children.
    fn second_smallest(&self) -> i64 {
        self.slots[1].min(self.slots[2])
    }

    /// Replaces the root when `x` beats it, keeping the `k` largest values seen.
    fn offer(&mut self, x: i64) {
        if x > self.slots[0] {
            self.slots[0] = x;
            self.sift_down(0);
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.slots.len();

        loop {
            let left = 2 * parent + 1;
            if left >= len {
                break;
            }

            let right = left + 1;
            let child = if right < len && self.slots[right] < self.slots[left] {
                right
            } else {
                left
            };

            if self.slots[parent] <= self.slots[child] {
                break;
            }

            self.slots.swap(parent, child);
            parent = child;
        }
    }
}
