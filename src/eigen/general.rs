//! Balanced Hessenberg QR iteration for general real eigenvalues.
//!
//! Companion matrices are a hard case for off-the-shelf QR sweeps: their
//! entries span many orders of magnitude, and their spectra pair up as ±λ,
//! which makes the natural shift choices cancel and the iteration stall.
//! The pipeline here follows the classical cure on both counts. The matrix
//! is rescaled with diagonal similarities and reduced to upper Hessenberg
//! form, then driven to quasi-triangular form by Francis double-shift
//! sweeps that switch to an ad-hoc exceptional shift whenever a block has
//! resisted ten of them.

use nalgebra::DMatrix;

use crate::error::{GhqError, Result};

/// Scaling base for balancing; powers of two leave mantissas untouched.
const RADIX: f64 = 2.0;

/// Sweeps allowed against a single trailing block before giving up.
const MAX_BLOCK_SWEEPS: usize = 30;

/// Rescale `a` in place with diagonal similarities until each row and its
/// matching column have comparable 1-norms. Eigenvalues are unchanged, and
/// because every scale factor is a power of two, so are the mantissas.
pub(super) fn balance(a: &mut DMatrix<f64>) {
    let n = a.nrows();
    let squared = RADIX * RADIX;

    let mut scaling = true;
    while scaling {
        scaling = false;
        for i in 0..n {
            let mut c = 0.0;
            let mut r = 0.0;
            for j in 0..n {
                if j != i {
                    c += a[(j, i)].abs();
                    r += a[(i, j)].abs();
                }
            }
            if c == 0.0 || r == 0.0 {
                continue;
            }

            let total = c + r;
            let mut f = 1.0;
            while c < r / RADIX {
                f *= RADIX;
                c *= squared;
            }
            while c > r * RADIX {
                f /= RADIX;
                c /= squared;
            }

            // Only apply a factor that shrinks the combined norm noticeably,
            // otherwise the loop would rescale forever
            if (c + r) / f < 0.95 * total {
                scaling = true;
                let inv = 1.0 / f;
                for j in 0..n {
                    a[(i, j)] *= inv;
                }
                for j in 0..n {
                    a[(j, i)] *= f;
                }
            }
        }
    }
}

/// Reduce `a` to upper Hessenberg form in place with Householder
/// reflections applied from both sides.
pub(super) fn hessenberg(a: &mut DMatrix<f64>) {
    let n = a.nrows();
    if n < 3 {
        return;
    }

    let mut v = vec![0.0; n];
    for k in 0..n - 2 {
        // Reflector for the subcolumn below the subdiagonal slot
        let mut norm_sq = 0.0;
        for i in k + 1..n {
            v[i] = a[(i, k)];
            norm_sq += v[i] * v[i];
        }
        if norm_sq == 0.0 {
            continue;
        }
        // Sign keeps v[k + 1] away from cancellation
        let alpha = if v[k + 1] >= 0.0 {
            -norm_sq.sqrt()
        } else {
            norm_sq.sqrt()
        };
        v[k + 1] -= alpha;

        let mut v_norm_sq = 0.0;
        for i in k + 1..n {
            v_norm_sq += v[i] * v[i];
        }
        if v_norm_sq == 0.0 {
            continue;
        }
        let v_norm = v_norm_sq.sqrt();
        for entry in &mut v[k + 1..] {
            *entry /= v_norm;
        }

        // A <- (I - 2vv^T) A on the affected rows
        for j in 0..n {
            let mut dot = 0.0;
            for i in k + 1..n {
                dot += v[i] * a[(i, j)];
            }
            for i in k + 1..n {
                a[(i, j)] -= 2.0 * v[i] * dot;
            }
        }
        // A <- A (I - 2vv^T) on the affected columns
        for i in 0..n {
            let mut dot = 0.0;
            for j in k + 1..n {
                dot += a[(i, j)] * v[j];
            }
            for j in k + 1..n {
                a[(i, j)] -= 2.0 * dot * v[j];
            }
        }

        // The reflected subcolumn is (alpha, 0, ..., 0); write it out so
        // rounding residue cannot masquerade as coupling
        a[(k + 1, k)] = alpha;
        for i in k + 2..n {
            a[(i, k)] = 0.0;
        }
    }
}

/// Eigenvalues of an upper Hessenberg matrix via Francis double-shift QR.
///
/// `h` is destroyed. Real and imaginary parts come back in deflation order;
/// complex values appear as conjugate pairs. `budget` caps the total sweep
/// count, with zero meaning no overall cap; independently of it, a single
/// block that refuses to deflate fails after `MAX_BLOCK_SWEEPS` sweeps, so
/// the iteration always terminates.
pub(super) fn hessenberg_eigenvalues(
    mut h: DMatrix<f64>,
    eps: f64,
    budget: usize,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let n = h.nrows();
    let mut re = vec![0.0; n];
    let mut im = vec![0.0; n];

    // Norm of the Hessenberg band, the deflation yardstick when a diagonal
    // pair vanishes
    let mut anorm = 0.0;
    for i in 0..n {
        for j in i.saturating_sub(1)..n {
            anorm += h[(i, j)].abs();
        }
    }

    let mut origin = 0.0; // accumulated exceptional-shift offset
    let mut sweeps = 0usize;
    let mut end = n; // exclusive bottom of the still-active block

    while end > 0 {
        let nn = end - 1;
        let mut its = 0;
        loop {
            // Find the highest negligible subdiagonal entry; the active
            // block starts right below it
            let mut l = 0;
            for cand in (1..=nn).rev() {
                let mut s = h[(cand - 1, cand - 1)].abs() + h[(cand, cand)].abs();
                if s == 0.0 {
                    s = anorm;
                }
                if h[(cand, cand - 1)].abs() <= eps * s {
                    h[(cand, cand - 1)] = 0.0;
                    l = cand;
                    break;
                }
            }

            let x = h[(nn, nn)];
            if l == nn {
                // 1x1 block: one real eigenvalue
                re[nn] = x + origin;
                im[nn] = 0.0;
                end = nn;
                break;
            }

            let y = h[(nn - 1, nn - 1)];
            let w = h[(nn, nn - 1)] * h[(nn - 1, nn)];
            if l + 1 == nn {
                // 2x2 block: a real pair or a complex conjugate pair
                let p = 0.5 * (y - x);
                let q = p * p + w;
                let z = q.abs().sqrt();
                let x = x + origin;
                if q >= 0.0 {
                    let z = p + if p >= 0.0 { z } else { -z };
                    re[nn - 1] = x + z;
                    re[nn] = if z != 0.0 { x - w / z } else { re[nn - 1] };
                    im[nn - 1] = 0.0;
                    im[nn] = 0.0;
                } else {
                    re[nn - 1] = x + p;
                    re[nn] = x + p;
                    im[nn - 1] = z;
                    im[nn] = -z;
                }
                end = nn - 1;
                break;
            }

            if its == MAX_BLOCK_SWEEPS || (budget != 0 && sweeps >= budget) {
                return Err(GhqError::NoConvergence { iterations: sweeps });
            }

            let (mut x, mut y, mut w) = (x, y, w);
            if its == 10 || its == 20 {
                // Exceptional shift, built from subdiagonal magnitudes only:
                // it cannot cancel the way shifts from a ±λ spectrum do
                origin += x;
                for i in 0..end {
                    h[(i, i)] -= x;
                }
                let s = h[(nn, nn - 1)].abs() + h[(nn - 1, nn - 2)].abs();
                x = 0.75 * s;
                y = x;
                w = -0.4375 * s * s;
            }
            its += 1;
            sweeps += 1;

            // Pick the row m where the double-shift bulge can start without
            // disturbing anything already negligible above it
            let mut m = l;
            let (mut p, mut q, mut r) = (0.0, 0.0, 0.0);
            for cand in (l..=nn - 2).rev() {
                let z = h[(cand, cand)];
                let rx = x - z;
                let sy = y - z;
                p = (rx * sy - w) / h[(cand + 1, cand)] + h[(cand, cand + 1)];
                q = h[(cand + 1, cand + 1)] - z - rx - sy;
                r = h[(cand + 2, cand + 1)];
                let scale = p.abs() + q.abs() + r.abs();
                p /= scale;
                q /= scale;
                r /= scale;
                m = cand;
                if cand == l {
                    break;
                }
                let u = h[(cand, cand - 1)].abs() * (q.abs() + r.abs());
                let v = p.abs()
                    * (h[(cand - 1, cand - 1)].abs() + z.abs() + h[(cand + 1, cand + 1)].abs());
                if u <= eps * v {
                    break;
                }
            }

            for i in m + 2..=nn {
                h[(i, i - 2)] = 0.0;
            }
            for i in m + 3..=nn {
                h[(i, i - 3)] = 0.0;
            }

            // Chase the bulge down the active block with 3x3 reflections
            for k in m..nn {
                let mut scale = 0.0;
                if k != m {
                    p = h[(k, k - 1)];
                    q = h[(k + 1, k - 1)];
                    r = if k + 1 != nn { h[(k + 2, k - 1)] } else { 0.0 };
                    scale = p.abs() + q.abs() + r.abs();
                    if scale != 0.0 {
                        p /= scale;
                        q /= scale;
                        r /= scale;
                    }
                }
                let magnitude = (p * p + q * q + r * r).sqrt();
                let s = if p >= 0.0 { magnitude } else { -magnitude };
                if s == 0.0 {
                    continue;
                }
                if k == m {
                    if l != m {
                        h[(k, k - 1)] = -h[(k, k - 1)];
                    }
                } else {
                    h[(k, k - 1)] = -s * scale;
                }
                p += s;
                let vx = p / s;
                let vy = q / s;
                let vz = r / s;
                q /= p;
                r /= p;
                for j in k..=nn {
                    let mut sum = h[(k, j)] + q * h[(k + 1, j)];
                    if k + 1 != nn {
                        sum += r * h[(k + 2, j)];
                        h[(k + 2, j)] -= sum * vz;
                    }
                    h[(k + 1, j)] -= sum * vy;
                    h[(k, j)] -= sum * vx;
                }
                let bottom = nn.min(k + 3);
                for i in l..=bottom {
                    let mut sum = vx * h[(i, k)] + vy * h[(i, k + 1)];
                    if k + 1 != nn {
                        sum += vz * h[(i, k + 2)];
                        h[(i, k + 2)] -= sum * r;
                    }
                    h[(i, k + 1)] -= sum * q;
                    h[(i, k)] -= sum;
                }
            }
        }
    }

    Ok((re, im))
}
